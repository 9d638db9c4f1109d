mod manager;
mod persistence;
mod source;

pub use manager::FoodCatalog;
pub use persistence::{
    load_catalog, load_catalog_csv, load_catalog_json, load_diet_plan, save_catalog,
};
pub use source::FoodSource;
