pub mod deal;
pub mod meal;
pub mod pantry;
pub mod request;
pub mod shopping;

pub use deal::Deal;
pub use meal::MealCatalogEntry;
pub use pantry::PantryEntry;
pub use request::{parse_meal_arg, MealRequest};
pub use shopping::{OptimizeResult, OptimizeWarning, ShoppingItem};
