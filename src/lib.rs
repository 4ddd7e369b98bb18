pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod matching;
pub mod models;
pub mod optimizer;

pub use catalog::{CatalogStore, MealCatalog};
pub use error::{CartError, Result};
pub use models::{Deal, MealCatalogEntry, MealRequest, OptimizeResult, PantryEntry, ShoppingItem};
pub use optimizer::{optimize, Optimizer, OptimizerConfig};
