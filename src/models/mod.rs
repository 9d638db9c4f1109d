pub mod food;
pub mod nutrient;
pub mod plan;

pub use food::{FoodId, FoodItem};
pub use nutrient::{Macronutrient, Nutrient};
pub use plan::{DietPlan, Meal, MealEntry, SubstitutionResult};
