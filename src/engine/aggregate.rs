use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::FoodSource;
use crate::engine::profile::{scale, NutrientProfile};
use crate::error::Result;
use crate::models::{DietPlan, FoodItem, Meal};

/// A meal entry after id resolution. `food` is `None` for a dangling id.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEntry<'a> {
    pub food: Option<&'a FoodItem>,
    pub quantity: f64,
}

impl<'a> ResolvedEntry<'a> {
    pub fn resolved(food: &'a FoodItem, quantity: f64) -> Self {
        Self {
            food: Some(food),
            quantity,
        }
    }

    pub fn unresolved(quantity: f64) -> Self {
        Self {
            food: None,
            quantity,
        }
    }
}

/// Summed profile plus the number of entries skipped as unresolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MealTotals {
    pub profile: NutrientProfile,
    pub unresolved: usize,
}

impl MealTotals {
    pub fn has_unresolved(&self) -> bool {
        self.unresolved > 0
    }
}

impl Add for MealTotals {
    type Output = MealTotals;

    fn add(self, other: Self) -> Self {
        Self {
            profile: self.profile + other.profile,
            unresolved: self.unresolved + other.unresolved,
        }
    }
}

impl Sum for MealTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MealSummary {
    pub name: String,
    pub totals: MealTotals,
}

/// Per-meal totals in plan order, and the diet-wide total.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DietTotals {
    pub meals: Vec<MealSummary>,
    pub total: MealTotals,
}

/// Sum scaled profiles of already-resolved entries.
pub fn aggregate_entries<'a, I>(entries: I) -> Result<MealTotals>
where
    I: IntoIterator<Item = ResolvedEntry<'a>>,
{
    let mut totals = MealTotals::default();
    for entry in entries {
        match entry.food {
            Some(food) => totals.profile += scale(food, entry.quantity)?,
            None => totals.unresolved += 1,
        }
    }
    Ok(totals)
}

/// Resolve a meal's food ids against `source`.
pub fn resolve_meal<'a, S>(meal: &Meal, source: &'a S) -> Vec<ResolvedEntry<'a>>
where
    S: FoodSource + ?Sized,
{
    meal.entries
        .iter()
        .map(|entry| {
            let food = source.food(&entry.food_id);
            if food.is_none() {
                debug!(meal = %meal.name, food_id = %entry.food_id, "unresolved meal entry");
            }
            ResolvedEntry {
                food,
                quantity: entry.quantity,
            }
        })
        .collect()
}

/// Total nutrients of one meal.
pub fn aggregate_meal<S>(meal: &Meal, source: &S) -> Result<MealTotals>
where
    S: FoodSource + ?Sized,
{
    let totals = aggregate_entries(resolve_meal(meal, source))?;
    if totals.has_unresolved() {
        warn!(
            meal = %meal.name,
            skipped = totals.unresolved,
            "skipped entries with unknown foods"
        );
    }
    Ok(totals)
}

/// Combine meal totals.
pub fn sum_totals<I>(totals: I) -> MealTotals
where
    I: IntoIterator<Item = MealTotals>,
{
    totals.into_iter().sum()
}

/// Per-meal and overall totals of a diet plan.
pub fn aggregate_diet<S>(plan: &DietPlan, source: &S) -> Result<DietTotals>
where
    S: FoodSource + ?Sized,
{
    let meals = plan
        .meals
        .iter()
        .map(|meal| -> Result<MealSummary> {
            Ok(MealSummary {
                name: meal.name.clone(),
                totals: aggregate_meal(meal, source)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let total = sum_totals(meals.iter().map(|m| m.totals));

    Ok(DietTotals { meals, total })
}
