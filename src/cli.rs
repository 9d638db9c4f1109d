use clap::{Parser, Subcommand, ValueEnum};

use crate::engine::{EquivalenceBasis, EquivalenceConfig, DEFAULT_SUBSTITUTION_LIMIT};

/// diet_equiv: nutrient totals and equivalent food substitutions.
#[derive(Parser, Debug)]
#[command(name = "diet_equiv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the food catalog (JSON, or CSV by extension).
    #[arg(short, long, default_value = "food_catalog.json", global = true)]
    pub catalog: String,

    /// Print results as JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute per-meal and total nutrients of a diet plan.
    Totals {
        /// Path to the diet plan JSON file.
        #[arg(short, long)]
        plan: String,
    },

    /// List equivalent substitutes for a consumed food.
    Equivalents {
        /// Food id or name (fuzzy matched).
        #[arg(short, long)]
        food: String,

        /// Consumed quantity, in the food's reference unit.
        #[arg(short, long, default_value = "100")]
        quantity: f64,

        /// Maximum number of substitutes.
        #[arg(short, long, default_value_t = DEFAULT_SUBSTITUTION_LIMIT)]
        limit: usize,

        /// Nutrient held constant.
        #[arg(short, long, value_enum, default_value_t = BasisArg::Macro)]
        basis: BasisArg,
    },

    /// Report corrupt records and calorie/macro mismatches.
    Check,

    /// Convert a CSV catalog into the JSON catalog file.
    Import {
        /// Source CSV file.
        #[arg(long)]
        csv: String,

        /// Destination JSON file (defaults to --catalog).
        #[arg(short, long)]
        out: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BasisArg {
    /// Dominant macronutrient of the food.
    Macro,
    /// Total calories.
    Calories,
}

impl From<BasisArg> for EquivalenceBasis {
    fn from(arg: BasisArg) -> Self {
        match arg {
            BasisArg::Macro => EquivalenceBasis::DominantMacro,
            BasisArg::Calories => EquivalenceBasis::Calories,
        }
    }
}

/// Build the substitution config from CLI flags.
pub fn equivalence_config(limit: usize, basis: BasisArg) -> EquivalenceConfig {
    EquivalenceConfig {
        limit,
        basis: basis.into(),
    }
}
