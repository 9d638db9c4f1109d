use std::fmt;

use serde::Serialize;

use crate::models::FoodItem;

/// The three macros a food can be classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Macronutrient {
    Carbohydrate,
    Protein,
    Lipid,
}

impl Macronutrient {
    /// Evaluation order for the numeric-max rule; earlier entries win ties.
    pub const TIE_BREAK_ORDER: [Macronutrient; 3] = [
        Macronutrient::Protein,
        Macronutrient::Carbohydrate,
        Macronutrient::Lipid,
    ];

    /// Reference-quantity value of this macro for `food`.
    pub fn reference_value(self, food: &FoodItem) -> f64 {
        Nutrient::from(self).reference_value(food)
    }

    pub fn label(self) -> &'static str {
        Nutrient::from(self).label()
    }
}

impl fmt::Display for Macronutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Any quantity an equivalence can be held constant on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nutrient {
    Calories,
    Carbohydrate,
    Protein,
    Lipid,
}

impl Nutrient {
    pub fn reference_value(self, food: &FoodItem) -> f64 {
        match self {
            Nutrient::Calories => food.calories,
            Nutrient::Carbohydrate => food.carbohydrate,
            Nutrient::Protein => food.protein,
            Nutrient::Lipid => food.lipid,
        }
    }

    /// Human-readable label shown next to a substitution.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Carbohydrate => "Carbohydrate",
            Nutrient::Protein => "Protein",
            Nutrient::Lipid => "Lipid",
        }
    }
}

impl From<Macronutrient> for Nutrient {
    fn from(m: Macronutrient) -> Self {
        match m {
            Macronutrient::Carbohydrate => Nutrient::Carbohydrate,
            Macronutrient::Protein => Nutrient::Protein,
            Macronutrient::Lipid => Nutrient::Lipid,
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
