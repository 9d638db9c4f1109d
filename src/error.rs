use thiserror::Error;

use crate::models::Nutrient;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid reference quantity {quantity} for food '{food}'")]
    InvalidReferenceQuantity { food: String, quantity: f64 },

    #[error("Invalid consumed quantity: {0}")]
    InvalidQuantity(f64),

    #[error("{nutrient} reference value of '{food}' is zero")]
    ZeroDominantNutrient { food: String, nutrient: Nutrient },

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
