use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::models::{FoodItem, Nutrient};

/// Calories and macros for a specific consumed quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientProfile {
    pub calories: f64,
    pub carbohydrate: f64,
    pub protein: f64,
    pub lipid: f64,
}

impl NutrientProfile {
    pub fn new(calories: f64, carbohydrate: f64, protein: f64, lipid: f64) -> Self {
        Self {
            calories,
            carbohydrate,
            protein,
            lipid,
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Protein => self.protein,
            Nutrient::Lipid => self.lipid,
        }
    }

    /// Sum of the three macros in grams.
    pub fn macro_total(&self) -> f64 {
        self.carbohydrate + self.protein + self.lipid
    }
}

impl Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            carbohydrate: self.carbohydrate + other.carbohydrate,
            protein: self.protein + other.protein,
            lipid: self.lipid + other.lipid,
        }
    }
}

impl AddAssign for NutrientProfile {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Fail with `InvalidReferenceQuantity` for a corrupt catalog record.
pub fn ensure_reference(food: &FoodItem) -> Result<()> {
    if food.has_valid_reference() {
        Ok(())
    } else {
        Err(EngineError::InvalidReferenceQuantity {
            food: food.name.clone(),
            quantity: food.reference_quantity,
        })
    }
}

/// Reference value of `nutrient` scaled to `quantity` of `food`.
///
/// Callers must have checked the reference quantity.
#[inline]
pub(crate) fn scaled_value(food: &FoodItem, nutrient: Nutrient, quantity: f64) -> f64 {
    nutrient.reference_value(food) * food.scale_factor(quantity)
}

/// Scale a food's reference nutrients to a consumed quantity.
pub fn scale(food: &FoodItem, quantity: f64) -> Result<NutrientProfile> {
    ensure_reference(food)?;
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(EngineError::InvalidQuantity(quantity));
    }

    Ok(NutrientProfile {
        calories: scaled_value(food, Nutrient::Calories, quantity),
        carbohydrate: scaled_value(food, Nutrient::Carbohydrate, quantity),
        protein: scaled_value(food, Nutrient::Protein, quantity),
        lipid: scaled_value(food, Nutrient::Lipid, quantity),
    })
}
