use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A dish in the meal catalog with its per-serving ingredient quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealCatalogEntry {
    pub meal_id: String,

    #[serde(default = "default_category")]
    pub category: String,

    /// Ingredient display name to quantity per serving.
    pub ingredients: BTreeMap<String, f64>,
}

fn default_category() -> String {
    "Uncategorized".to_string()
}

impl MealCatalogEntry {
    pub fn new(meal_id: &str, category: &str, ingredients: &[(&str, f64)]) -> Self {
        Self {
            meal_id: meal_id.to_string(),
            category: category.to_string(),
            ingredients: ingredients
                .iter()
                .map(|(name, qty)| (name.to_string(), *qty))
                .collect(),
        }
    }

    /// Non-empty id and finite, non-negative per-serving quantities.
    pub fn is_valid(&self) -> bool {
        !self.meal_id.trim().is_empty()
            && self
                .ingredients
                .iter()
                .all(|(name, qty)| !name.trim().is_empty() && qty.is_finite() && *qty >= 0.0)
    }
}
