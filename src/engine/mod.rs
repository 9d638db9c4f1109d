pub mod aggregate;
pub mod classify;
pub mod constants;
pub mod energy;
pub mod equivalence;
pub mod profile;

pub use aggregate::{
    aggregate_diet, aggregate_entries, aggregate_meal, resolve_meal, sum_totals, DietTotals,
    MealSummary, MealTotals, ResolvedEntry,
};
pub use classify::{classify, numeric_dominant};
pub use constants::*;
pub use energy::{audit_catalog, calorie_discrepancy, calories_from_macros, CalorieDiscrepancy, CatalogAudit};
pub use equivalence::{
    equivalences, find_equivalents, preserved_nutrient, EquivalenceBasis, EquivalenceConfig,
};
pub use profile::{ensure_reference, scale, NutrientProfile};
