pub mod prompts;
pub mod render;

pub use prompts::{prompt_meal_selection, prompt_servings, prompt_yes_no, suggest_meal};
pub use render::{display_catalog, display_conversion, display_result};
