pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;

pub use catalog::{FoodCatalog, FoodSource};
pub use engine::{
    aggregate_diet, aggregate_meal, classify, find_equivalents, scale, EquivalenceConfig,
    NutrientProfile,
};
pub use error::{EngineError, Result};
pub use models::{DietPlan, FoodId, FoodItem, Macronutrient, Meal, MealEntry, SubstitutionResult};
