pub mod prompts;
pub mod render;

pub use prompts::{fuzzy_candidates, prompt_yes_no, resolve_food};
pub use render::{
    display_audit, display_catalog_summary, display_diet_totals, display_substitutions,
};
