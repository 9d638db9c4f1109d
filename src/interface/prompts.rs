use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::catalog::{FoodCatalog, FoodSource};
use crate::engine::FUZZY_MATCH_THRESHOLD;
use crate::error::Result;
use crate::models::FoodItem;

/// Catalog foods whose names resemble `query`, best match first.
pub fn fuzzy_candidates<'a>(catalog: &'a FoodCatalog, query: &str) -> Vec<(&'a FoodItem, f64)> {
    let query = query.trim().to_lowercase();

    let mut candidates: Vec<(&FoodItem, f64)> = catalog
        .foods()
        .into_iter()
        .map(|f| (f, jaro_winkler(&f.key(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Resolve a food by id, exact name, or fuzzy name with confirmation.
pub fn resolve_food<'a>(catalog: &'a FoodCatalog, query: &str) -> Result<Option<&'a FoodItem>> {
    if let Some(food) = catalog.lookup(query) {
        return Ok(Some(food));
    }

    let candidates = fuzzy_candidates(catalog, query);

    match candidates.as_slice() {
        [] => {
            println!("No matching food found for '{}'", query.trim());
            Ok(None)
        }
        [(food, _)] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(*food))
        }
        _ => {
            // Multiple matches - let user select
            let options: Vec<&FoodItem> = candidates.iter().take(5).map(|(f, _)| *f).collect();

            let mut labels: Vec<String> = options
                .iter()
                .map(|f| format!("{} ({})", f.name, f.category))
                .collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            Ok(options.get(selection).copied())
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
