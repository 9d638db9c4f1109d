use crate::catalog::FoodCatalog;
use crate::engine::{CatalogAudit, DietTotals, NutrientProfile, CALORIE_DISCREPANCY_THRESHOLD_PCT};
use crate::models::{DietPlan, FoodItem, SubstitutionResult};

fn profile_line(profile: &NutrientProfile) -> String {
    format!(
        "{:>7.0} kcal | C {:>6.1} g | P {:>6.1} g | L {:>6.1} g | {:>6.1} g macros",
        profile.calories,
        profile.carbohydrate,
        profile.protein,
        profile.lipid,
        profile.macro_total()
    )
}

/// Display per-meal and diet totals.
pub fn display_diet_totals(plan: &DietPlan, totals: &DietTotals) {
    if totals.meals.is_empty() {
        println!("Diet '{}' has no meals.", plan.name);
        return;
    }

    println!();
    println!("=== {} ({} entries) ===", plan.name, plan.entry_count());
    println!();

    let max_name_len = totals
        .meals
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(10);

    for meal in &totals.meals {
        let skipped = if meal.totals.has_unresolved() {
            format!("  [{} unresolved]", meal.totals.unresolved)
        } else {
            String::new()
        };
        println!(
            "  {:<width$}  {}{}",
            meal.name,
            profile_line(&meal.totals.profile),
            skipped,
            width = max_name_len
        );
    }

    println!();
    println!("--- Total ---");
    println!("  {}", profile_line(&totals.total.profile));

    if totals.total.has_unresolved() {
        println!();
        println!(
            "Warning: {} entries reference foods missing from the catalog and were counted as zero.",
            totals.total.unresolved
        );
    }
    println!();
}

/// Display substitutes for a consumed food.
pub fn display_substitutions(food: &FoodItem, quantity: f64, results: &[SubstitutionResult]) {
    println!();
    println!("{} ({}) - {} g", food.name, food.category, quantity);

    if results.is_empty() {
        println!("  No substitutions found in the same category.");
        println!();
        return;
    }

    println!("Equivalent substitutes ({}):", results[0].nutrient);
    for sub in results {
        println!("  {:>8.1} g  {}", sub.quantity, sub.name);
    }
    println!();
}

/// One-line catalog summary, e.g. after an import.
pub fn display_catalog_summary(catalog: &FoodCatalog, source: &str) {
    let categories = catalog.categories();
    println!(
        "Read {} foods in {} categories from {}: {}",
        catalog.len(),
        categories.len(),
        source,
        categories.join(", ")
    );
}

/// Display a catalog audit report.
pub fn display_audit(audit: &CatalogAudit) {
    println!();
    println!("Checked {} foods.", audit.checked);

    if audit.is_clean() {
        println!("No issues found.");
        println!();
        return;
    }

    if !audit.invalid_reference.is_empty() {
        println!();
        println!("Invalid reference quantity:");
        for e in &audit.invalid_reference {
            println!("  [{}] {} - {}", e.food_id, e.name, e.detail);
        }
    }

    if !audit.negative_values.is_empty() {
        println!();
        println!("Negative nutrient values:");
        for e in &audit.negative_values {
            println!("  [{}] {} - {}", e.food_id, e.name, e.detail);
        }
    }

    if !audit.calorie_discrepancies.is_empty() {
        println!();
        println!(
            "Calories differ from macros by more than {:.0}%:",
            CALORIE_DISCREPANCY_THRESHOLD_PCT
        );
        for e in &audit.calorie_discrepancies {
            println!(
                "  [{}] {} - stated {:.1} kcal, macros {:.1} kcal ({:.1}%)",
                e.food_id, e.name, e.detail.stated, e.detail.computed, e.detail.percent
            );
        }
    }

    println!();
    println!("{} issue(s).", audit.issue_count());
    println!();
}
