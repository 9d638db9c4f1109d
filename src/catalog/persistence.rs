use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{DietPlan, FoodItem};

/// Load catalog records from a JSON array.
pub fn load_catalog_json<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(&path)?;
    let foods: Vec<FoodItem> = serde_json::from_str(&content)?;
    debug!(path = %path.as_ref().display(), count = foods.len(), "loaded catalog");
    Ok(foods)
}

/// Load catalog records from a CSV file with a header row.
///
/// Columns: `id,name,category,reference_quantity,calories,carbohydrate,protein,lipid`.
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&path)?;

    let foods = reader
        .deserialize()
        .collect::<std::result::Result<Vec<FoodItem>, csv::Error>>()?;
    debug!(path = %path.as_ref().display(), count = foods.len(), "loaded CSV catalog");
    Ok(foods)
}

/// Load a catalog file, picking the format from the extension.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let is_csv = path
        .as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        load_catalog_csv(path)
    } else {
        load_catalog_json(path)
    }
}

/// Save catalog records as a pretty-printed JSON array.
pub fn save_catalog<P: AsRef<Path>>(path: P, foods: &[FoodItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(foods)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a diet plan from JSON.
pub fn load_diet_plan<P: AsRef<Path>>(path: P) -> Result<DietPlan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
