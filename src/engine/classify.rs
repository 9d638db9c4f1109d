use crate::engine::constants::category_override;
use crate::models::{FoodItem, Macronutrient};

/// Determine the macro held constant when substituting `food`.
///
/// A recognized category label (see `CATEGORY_OVERRIDES`) wins outright.
/// Otherwise the largest reference macro is chosen; ties resolve to
/// protein, then carbohydrate, then lipid.
///
/// The returned macro may have a zero reference value.
pub fn classify(food: &FoodItem) -> Macronutrient {
    if let Some(forced) = category_override(&food.category) {
        return forced;
    }
    numeric_dominant(food)
}

/// Largest reference macro, first maximum in tie-break order.
pub fn numeric_dominant(food: &FoodItem) -> Macronutrient {
    let mut best = Macronutrient::TIE_BREAK_ORDER[0];
    let mut best_value = best.reference_value(food);

    for candidate in &Macronutrient::TIE_BREAK_ORDER[1..] {
        let value = candidate.reference_value(food);
        // Strictly greater: equal values keep the earlier macro.
        if value > best_value {
            best = *candidate;
            best_value = value;
        }
    }

    best
}
