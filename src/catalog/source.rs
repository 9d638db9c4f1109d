use crate::models::{FoodId, FoodItem};

/// Read-only provider of catalog records.
pub trait FoodSource {
    /// Look up a food by id.
    fn food(&self, id: &FoodId) -> Option<&FoodItem>;

    /// All foods, in catalog order.
    fn foods(&self) -> Vec<&FoodItem>;

    /// Foods sharing `item`'s category, excluding `item`, in catalog order.
    fn category_pool(&self, item: &FoodItem) -> Vec<&FoodItem> {
        self.foods()
            .into_iter()
            .filter(|f| f.category == item.category && f.id != item.id)
            .collect()
    }
}

impl FoodSource for [FoodItem] {
    /// The last record with `id` wins, matching `FoodCatalog`.
    fn food(&self, id: &FoodId) -> Option<&FoodItem> {
        self.iter().rev().find(|f| &f.id == id)
    }

    fn foods(&self) -> Vec<&FoodItem> {
        self.iter().collect()
    }
}
