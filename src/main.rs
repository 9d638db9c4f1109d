use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use diet_equivalence_rs::catalog::{
    load_catalog, load_catalog_csv, load_diet_plan, save_catalog, FoodCatalog, FoodSource,
};
use diet_equivalence_rs::cli::{equivalence_config, BasisArg, Cli, Command};
use diet_equivalence_rs::engine::{aggregate_diet, audit_catalog, find_equivalents};
use diet_equivalence_rs::error::{EngineError, Result};
use diet_equivalence_rs::interface::{
    display_audit, display_catalog_summary, display_diet_totals, display_substitutions,
    prompt_yes_no, resolve_food,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Totals { ref plan } => cmd_totals(&cli.catalog, plan, cli.json),
        Command::Equivalents {
            ref food,
            quantity,
            limit,
            basis,
        } => cmd_equivalents(&cli.catalog, food, quantity, limit, basis, cli.json),
        Command::Check => cmd_check(&cli.catalog, cli.json),
        Command::Import { ref csv, ref out } => {
            cmd_import(csv, out.as_deref().unwrap_or(&cli.catalog))
        }
    }
}

fn open_catalog(file_path: &str) -> Result<FoodCatalog> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(EngineError::InvalidInput(format!(
            "Food catalog not found: {}",
            file_path
        )));
    }
    Ok(FoodCatalog::new(load_catalog(path)?))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Compute nutrient totals for a diet plan.
fn cmd_totals(catalog_path: &str, plan_path: &str, json: bool) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;
    let plan = load_diet_plan(plan_path)?;

    let totals = aggregate_diet(&plan, &catalog)?;

    if json {
        print_json(&totals)
    } else {
        display_diet_totals(&plan, &totals);
        Ok(())
    }
}

/// List equivalent substitutes for a consumed food.
fn cmd_equivalents(
    catalog_path: &str,
    query: &str,
    quantity: f64,
    limit: usize,
    basis: BasisArg,
    json: bool,
) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;

    let food = if json {
        catalog.lookup(query)
    } else {
        resolve_food(&catalog, query)?
    };
    let food = food.ok_or_else(|| EngineError::FoodNotFound(query.to_string()))?;

    let config = equivalence_config(limit, basis);
    let results = find_equivalents(food, quantity, catalog.category_pool(food), &config)?;

    if json {
        print_json(&results)
    } else {
        display_substitutions(food, quantity, &results);
        Ok(())
    }
}

/// Audit the catalog for corrupt or inconsistent records.
fn cmd_check(catalog_path: &str, json: bool) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;
    let audit = audit_catalog(catalog.foods());

    if json {
        print_json(&audit)
    } else {
        display_audit(&audit);
        Ok(())
    }
}

/// Convert a CSV catalog to JSON.
fn cmd_import(csv_path: &str, out_path: &str) -> Result<()> {
    let foods = load_catalog_csv(csv_path)?;
    let catalog = FoodCatalog::new(foods);

    display_catalog_summary(&catalog, csv_path);

    let audit = audit_catalog(catalog.foods());
    if !audit.is_clean() {
        display_audit(&audit);
    }

    if Path::new(out_path).exists() {
        let overwrite = prompt_yes_no(&format!("Overwrite {}?", out_path), false)?;
        if !overwrite {
            println!("Import cancelled.");
            return Ok(());
        }
    }

    save_catalog(out_path, &catalog.to_foods())?;
    println!("Catalog saved to {}.", out_path);

    Ok(())
}
