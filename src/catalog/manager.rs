use std::collections::HashMap;

use crate::catalog::FoodSource;
use crate::engine::{find_equivalents, EquivalenceConfig};
use crate::error::{EngineError, Result};
use crate::models::{FoodId, FoodItem, SubstitutionResult};

/// In-memory food catalog keyed by id, preserving load order.
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
    /// Position of each id in `foods`.
    index: HashMap<FoodId, usize>,
}

impl FoodCatalog {
    /// Create a catalog from a list of foods.
    ///
    /// A repeated id replaces the earlier record in place (last wins).
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut catalog = Self {
            foods: Vec::with_capacity(foods.len()),
            index: HashMap::new(),
        };
        for food in foods {
            catalog.insert(food);
        }
        catalog
    }

    fn insert(&mut self, food: FoodItem) {
        if let Some(&pos) = self.index.get(&food.id) {
            self.foods[pos] = food;
            return;
        }
        self.index.insert(food.id.clone(), self.foods.len());
        self.foods.push(food);
    }

    /// Get a food by id.
    pub fn get(&self, id: &FoodId) -> Option<&FoodItem> {
        self.index.get(id).map(|&pos| &self.foods[pos])
    }

    /// Get the first food with this name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&FoodItem> {
        let key = name.trim().to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// Resolve a user query as an id first, then as a name.
    pub fn lookup(&self, query: &str) -> Option<&FoodItem> {
        self.get(&FoodId::from(query.trim()))
            .or_else(|| self.find_by_name(query))
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for food in &self.foods {
            if !seen.contains(&food.category.as_str()) {
                seen.push(&food.category);
            }
        }
        seen
    }

    /// Substitutes for `quantity` of the food with id `id`, drawn from its
    /// category in catalog order.
    pub fn find_equivalents(
        &self,
        id: &FoodId,
        quantity: f64,
        config: &EquivalenceConfig,
    ) -> Result<Vec<SubstitutionResult>> {
        let food = self
            .get(id)
            .ok_or_else(|| EngineError::FoodNotFound(id.to_string()))?;
        find_equivalents(food, quantity, self.category_pool(food), config)
    }

    /// Records in catalog order.
    pub fn to_foods(&self) -> Vec<FoodItem> {
        self.foods.clone()
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl FoodSource for FoodCatalog {
    fn food(&self, id: &FoodId) -> Option<&FoodItem> {
        self.get(id)
    }

    fn foods(&self) -> Vec<&FoodItem> {
        self.foods.iter().collect()
    }
}
