use serde::Serialize;
use tracing::debug;

use crate::engine::classify::classify;
use crate::engine::constants::{round_half_up, DEFAULT_SUBSTITUTION_LIMIT, DISPLAY_DECIMALS};
use crate::engine::profile::{ensure_reference, scaled_value};
use crate::error::{EngineError, Result};
use crate::models::{FoodItem, Nutrient, SubstitutionResult};

/// What a substitution holds constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum EquivalenceBasis {
    /// The item's dominant macro (see [`classify`]).
    #[default]
    DominantMacro,
    /// Total calories.
    Calories,
}

/// Configurable knobs for substitution queries.
#[derive(Debug, Clone)]
pub struct EquivalenceConfig {
    /// Maximum number of substitutes returned.
    pub limit: usize,
    pub basis: EquivalenceBasis,
}

impl Default for EquivalenceConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUBSTITUTION_LIMIT,
            basis: EquivalenceBasis::default(),
        }
    }
}

/// A preserved nutrient value has to be positive and finite to divide by.
#[inline]
fn is_usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Nutrient preserved for `food` under `basis`.
pub fn preserved_nutrient(food: &FoodItem, basis: EquivalenceBasis) -> Nutrient {
    match basis {
        EquivalenceBasis::DominantMacro => classify(food).into(),
        EquivalenceBasis::Calories => Nutrient::Calories,
    }
}

/// Compute substitute quantities for `quantity` of `food`.
///
/// Candidates must share `food`'s category and have a positive, finite value
/// for the preserved nutrient; others are skipped. Results keep pool order and
/// are truncated to `config.limit`.
///
/// Fails with `ZeroDominantNutrient` when `food` has no usable amount of the
/// preserved nutrient, and with `InvalidReferenceQuantity` when `food` or a
/// same-category candidate is a corrupt record.
pub fn equivalences<'a, I>(
    food: &FoodItem,
    quantity: f64,
    pool: I,
    config: &EquivalenceConfig,
) -> Result<Vec<SubstitutionResult>>
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    ensure_reference(food)?;
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(EngineError::InvalidQuantity(quantity));
    }

    let nutrient = preserved_nutrient(food, config.basis);
    let reference_value = nutrient.reference_value(food);
    if !is_usable(reference_value) {
        return Err(EngineError::ZeroDominantNutrient {
            food: food.name.clone(),
            nutrient,
        });
    }

    let consumed = scaled_value(food, nutrient, quantity);

    let mut results = Vec::new();
    let mut excluded = 0usize;

    for candidate in pool {
        if candidate.category != food.category || candidate.id == food.id {
            continue;
        }
        ensure_reference(candidate)?;

        let candidate_value = nutrient.reference_value(candidate);
        if !is_usable(candidate_value) {
            excluded += 1;
            continue;
        }

        let equivalent = consumed * candidate.reference_quantity / candidate_value;
        results.push(SubstitutionResult {
            food_id: candidate.id.clone(),
            name: candidate.name.clone(),
            quantity: round_half_up(equivalent, DISPLAY_DECIMALS),
            nutrient,
        });
    }

    debug!(
        food = %food.name,
        %nutrient,
        consumed,
        found = results.len(),
        excluded,
        "computed equivalences"
    );

    results.truncate(config.limit);
    Ok(results)
}

/// Caller-facing substitution query.
///
/// A missing preserved nutrient is an expected catalog gap and yields an
/// empty list; structural errors are returned.
pub fn find_equivalents<'a, I>(
    food: &FoodItem,
    quantity: f64,
    pool: I,
    config: &EquivalenceConfig,
) -> Result<Vec<SubstitutionResult>>
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    match equivalences(food, quantity, pool, config) {
        Err(EngineError::ZeroDominantNutrient { food, nutrient }) => {
            debug!(%food, %nutrient, "no substitutions: preserved nutrient is zero");
            Ok(Vec::new())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodId;

    fn food(id: &str, name: &str, category: &str, kcal: f64, c: f64, p: f64, l: f64) -> FoodItem {
        FoodItem {
            id: FoodId::from(id),
            name: name.to_string(),
            category: category.to_string(),
            reference_quantity: 100.0,
            calories: kcal,
            carbohydrate: c,
            protein: p,
            lipid: l,
        }
    }

    fn carb_pool() -> Vec<FoodItem> {
        vec![
            food("1", "Rice", "Carbohydrate", 130.0, 28.0, 2.7, 0.3),
            food("2", "Potato", "Carbohydrate", 77.0, 17.0, 2.0, 0.1),
            food("3", "Chicken", "Protein", 165.0, 0.0, 31.0, 3.6),
            food("4", "Oats", "Carbohydrate", 389.0, 66.0, 16.9, 6.9),
            food("5", "Diet soda", "Carbohydrate", 0.0, 0.0, 0.0, 0.0),
            food("6", "Pasta", "Carbohydrate", 158.0, 31.0, 5.8, 0.9),
            food("7", "Bread", "Carbohydrate", 265.0, 49.0, 9.0, 3.2),
        ]
    }

    #[test]
    fn test_rice_to_potato() {
        let pool = carb_pool();
        let results = equivalences(&pool[0], 150.0, &pool, &EquivalenceConfig::default()).unwrap();

        assert_eq!(results[0].name, "Potato");
        assert_eq!(results[0].quantity, 247.1);
        assert_eq!(results[0].nutrient, Nutrient::Carbohydrate);
    }

    #[test]
    fn test_keeps_pool_order_and_limit() {
        let pool = carb_pool();
        let results = equivalences(&pool[0], 150.0, &pool, &EquivalenceConfig::default()).unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Potato", "Oats", "Pasta"]);

        let config = EquivalenceConfig {
            limit: 10,
            ..Default::default()
        };
        let all = equivalences(&pool[0], 150.0, &pool, &config).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].name, "Bread");
    }

    #[test]
    fn test_excludes_self_other_categories_and_zero_candidates() {
        let pool = carb_pool();
        let config = EquivalenceConfig {
            limit: 100,
            ..Default::default()
        };
        let results = equivalences(&pool[0], 100.0, &pool, &config).unwrap();

        assert!(results.iter().all(|r| r.food_id != pool[0].id));
        assert!(results.iter().all(|r| r.name != "Chicken"));
        assert!(results.iter().all(|r| r.name != "Diet soda"));
    }

    #[test]
    fn test_skips_negative_nan_and_infinite_candidates() {
        let mut pool = carb_pool();
        let mut bad = |id: &str, carbohydrate: f64| {
            let mut f = food(id, id, "Carbohydrate", 100.0, carbohydrate, 1.0, 1.0);
            f.name = format!("bad {}", id);
            pool.insert(1, f);
        };
        bad("neg", -4.0);
        bad("nan", f64::NAN);
        bad("inf", f64::INFINITY);

        let config = EquivalenceConfig {
            limit: 100,
            ..Default::default()
        };
        let results = equivalences(&pool[0], 150.0, &pool, &config).unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Potato", "Oats", "Pasta", "Bread"]);
        assert!(results.iter().all(|r| r.quantity > 0.0 && r.quantity.is_finite()));
    }

    #[test]
    fn test_only_infinite_candidate_gives_empty_list() {
        let rice = food("1", "Rice", "Carbohydrate", 130.0, 28.0, 2.7, 0.3);
        let broken = food("2", "Broken", "Carbohydrate", 100.0, f64::INFINITY, 0.0, 0.0);

        let config = EquivalenceConfig::default();
        let results = find_equivalents(&rice, 150.0, [&rice, &broken], &config).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_non_finite_item_value_is_treated_as_zero() {
        let pool = carb_pool();
        let mut item = food("9", "Corrupt", "Carbohydrate", 100.0, f64::INFINITY, 1.0, 1.0);
        assert!(matches!(
            equivalences(&item, 100.0, &pool, &EquivalenceConfig::default()),
            Err(EngineError::ZeroDominantNutrient { .. })
        ));

        item.carbohydrate = f64::NAN;
        assert!(find_equivalents(&item, 100.0, &pool, &EquivalenceConfig::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_zero_dominant() {
        let pool = carb_pool();
        let soda = &pool[4];

        assert!(matches!(
            equivalences(soda, 330.0, &pool, &EquivalenceConfig::default()),
            Err(EngineError::ZeroDominantNutrient { .. })
        ));
        assert!(find_equivalents(soda, 330.0, &pool, &EquivalenceConfig::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_invalid_reference_is_not_recovered() {
        let mut pool = carb_pool();
        pool[1].reference_quantity = 0.0;

        assert!(matches!(
            find_equivalents(&pool[0], 100.0, &pool, &EquivalenceConfig::default()),
            Err(EngineError::InvalidReferenceQuantity { .. })
        ));
    }

    #[test]
    fn test_calorie_basis() {
        let pool = carb_pool();
        let config = EquivalenceConfig {
            basis: EquivalenceBasis::Calories,
            ..Default::default()
        };
        let results = equivalences(&pool[0], 100.0, &pool, &config).unwrap();

        // 130 kcal of rice = 130 * 100 / 77 g of potato
        assert_eq!(results[0].name, "Potato");
        assert_eq!(results[0].quantity, 168.8);
        assert_eq!(results[0].nutrient, Nutrient::Calories);
    }

    #[test]
    fn test_limit_zero() {
        let pool = carb_pool();
        let config = EquivalenceConfig {
            limit: 0,
            ..Default::default()
        };
        assert!(equivalences(&pool[0], 100.0, &pool, &config).unwrap().is_empty());
    }
}
