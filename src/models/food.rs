use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque catalog identifier.
///
/// Numeric ids found in input files are kept in their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FoodId(String);

impl FoodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FoodId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for FoodId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for FoodId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => FoodId(n.to_string()),
            RawId::Text(s) => FoodId(s),
        })
    }
}

/// A catalog food with nutrient values measured at its reference quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,

    pub name: String,

    /// Group of mutually substitutable foods.
    pub category: String,

    /// Mass (or volume) the nutrient values below are given for, e.g. 100 g.
    pub reference_quantity: f64,

    #[serde(alias = "kcal")]
    pub calories: f64,

    #[serde(alias = "carbs")]
    pub carbohydrate: f64,

    pub protein: f64,

    #[serde(alias = "fat")]
    pub lipid: f64,
}

impl FoodItem {
    /// Ratio applied to every reference value when `quantity` is consumed.
    #[inline]
    pub fn scale_factor(&self, quantity: f64) -> f64 {
        quantity / self.reference_quantity
    }

    pub fn has_valid_reference(&self) -> bool {
        self.reference_quantity.is_finite() && self.reference_quantity > 0.0
    }

    /// Basic validation: positive reference quantity and non-negative nutrients.
    pub fn is_valid(&self) -> bool {
        self.has_valid_reference()
            && self.calories >= 0.0
            && self.carbohydrate >= 0.0
            && self.protein >= 0.0
            && self.lipid >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}] {}: {} kcal, C:{} P:{} L:{} per {}",
            self.id,
            self.category,
            self.name,
            self.calories,
            self.carbohydrate,
            self.protein,
            self.lipid,
            self.reference_quantity
        )
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
