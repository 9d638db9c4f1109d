use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::Macronutrient;

/// Default number of substitutes returned per query.
pub const DEFAULT_SUBSTITUTION_LIMIT: usize = 3;

/// Decimal places kept on equivalent quantities.
pub const DISPLAY_DECIMALS: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Energy (Atwater general factors)
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_GRAM_CARBOHYDRATE: f64 = 4.0;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_LIPID: f64 = 9.0;

/// Stated vs macro-derived calories may differ by this much (percent)
/// before a catalog entry is flagged.
pub const CALORIE_DISCREPANCY_THRESHOLD_PCT: f64 = 10.0;

/// Minimum Jaro-Winkler similarity for a fuzzy food-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Category labels that force the dominant macro, keyed by lowercase label.
pub static CATEGORY_OVERRIDES: LazyLock<HashMap<&'static str, Macronutrient>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("carbohydrate", Macronutrient::Carbohydrate);
        m.insert("carbohydrates", Macronutrient::Carbohydrate);
        m.insert("protein", Macronutrient::Protein);
        m.insert("proteins", Macronutrient::Protein);
        m.insert("lipid", Macronutrient::Lipid);
        m.insert("lipids", Macronutrient::Lipid);
        m.insert("fat", Macronutrient::Lipid);
        m.insert("fats", Macronutrient::Lipid);
        m
    });

/// Forced dominant macro for a category label, if the label is recognized.
pub fn category_override(category: &str) -> Option<Macronutrient> {
    CATEGORY_OVERRIDES
        .get(category.trim().to_lowercase().as_str())
        .copied()
}

/// Round half-up to `decimals` places.
///
/// Inputs are non-negative quantities, where `f64::round` (half away from
/// zero) is half-up.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
