use serde::Serialize;
use tracing::warn;

use crate::engine::constants::*;
use crate::models::{FoodId, FoodItem};

/// Calories implied by macro grams (Atwater general factors).
pub fn calories_from_macros(carbohydrate: f64, protein: f64, lipid: f64) -> f64 {
    carbohydrate * KCAL_PER_GRAM_CARBOHYDRATE
        + protein * KCAL_PER_GRAM_PROTEIN
        + lipid * KCAL_PER_GRAM_LIPID
}

/// Stated calories that disagree with the macro-derived estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieDiscrepancy {
    pub stated: f64,
    pub computed: f64,
    pub difference: f64,
    pub percent: f64,
}

/// Compare a food's stated calories against its macros.
///
/// Returns `None` when either figure is zero or the gap is within
/// `CALORIE_DISCREPANCY_THRESHOLD_PCT` of the computed value.
pub fn calorie_discrepancy(food: &FoodItem) -> Option<CalorieDiscrepancy> {
    let stated = food.calories;
    let computed = calories_from_macros(food.carbohydrate, food.protein, food.lipid);

    if stated == 0.0 || computed == 0.0 {
        return None;
    }

    let difference = (stated - computed).abs();
    let percent = difference / computed * 100.0;

    (percent > CALORIE_DISCREPANCY_THRESHOLD_PCT).then_some(CalorieDiscrepancy {
        stated,
        computed,
        difference,
        percent,
    })
}

/// A flagged catalog record.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry<T> {
    pub food_id: FoodId,
    pub name: String,
    pub detail: T,
}

/// Consistency report for a set of catalog records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogAudit {
    pub checked: usize,
    /// Records whose reference quantity is zero, negative or not a number.
    pub invalid_reference: Vec<AuditEntry<f64>>,
    /// Records with a negative nutrient value.
    pub negative_values: Vec<AuditEntry<String>>,
    pub calorie_discrepancies: Vec<AuditEntry<CalorieDiscrepancy>>,
}

impl CatalogAudit {
    pub fn is_clean(&self) -> bool {
        self.invalid_reference.is_empty()
            && self.negative_values.is_empty()
            && self.calorie_discrepancies.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.invalid_reference.len() + self.negative_values.len() + self.calorie_discrepancies.len()
    }
}

fn entry<T>(food: &FoodItem, detail: T) -> AuditEntry<T> {
    AuditEntry {
        food_id: food.id.clone(),
        name: food.name.clone(),
        detail,
    }
}

fn record_structural_issues(audit: &mut CatalogAudit, food: &FoodItem) {
    if !food.has_valid_reference() {
        audit
            .invalid_reference
            .push(entry(food, food.reference_quantity));
    }

    let negatives: Vec<&str> = [
        ("calories", food.calories),
        ("carbohydrate", food.carbohydrate),
        ("protein", food.protein),
        ("lipid", food.lipid),
    ]
    .into_iter()
    .filter(|(_, v)| *v < 0.0)
    .map(|(name, _)| name)
    .collect();
    if !negatives.is_empty() {
        audit.negative_values.push(entry(food, negatives.join(", ")));
    }
}

/// Check every record for structural problems and calorie mismatches.
pub fn audit_catalog<'a, I>(foods: I) -> CatalogAudit
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    let mut audit = CatalogAudit::default();

    for food in foods {
        audit.checked += 1;

        if !food.is_valid() {
            warn!(food = %food.debug_string(), "invalid catalog record");
            record_structural_issues(&mut audit, food);
        }

        if let Some(discrepancy) = calorie_discrepancy(food) {
            audit.calorie_discrepancies.push(entry(food, discrepancy));
        }
    }

    audit
}
