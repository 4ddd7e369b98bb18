mod builtin;
pub mod persistence;
mod store;

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CartError, Result};
use crate::models::MealCatalogEntry;

pub use store::CatalogStore;

/// Immutable meal reference data, keyed by meal id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealCatalog {
    meals: BTreeMap<String, MealCatalogEntry>,
}

impl MealCatalog {
    /// Build a catalog from entries. Later duplicates replace earlier ones.
    pub fn new(entries: Vec<MealCatalogEntry>) -> Result<Self> {
        let mut meals = BTreeMap::new();
        for entry in entries {
            if !entry.is_valid() {
                return Err(CartError::InvalidCatalog(format!(
                    "meal '{}' has an empty name or an invalid ingredient quantity",
                    entry.meal_id
                )));
            }
            meals.insert(entry.meal_id.clone(), entry);
        }
        Ok(Self { meals })
    }

    /// The curated catalog shipped with the crate.
    pub fn builtin() -> Self {
        let meals = builtin::entries()
            .into_iter()
            .map(|entry| (entry.meal_id.clone(), entry))
            .collect();
        Self { meals }
    }

    pub fn get(&self, meal_id: &str) -> Option<&MealCatalogEntry> {
        self.meals.get(meal_id)
    }

    pub fn ingredients(&self, meal_id: &str) -> Option<&BTreeMap<String, f64>> {
        self.get(meal_id).map(|entry| &entry.ingredients)
    }

    pub fn contains(&self, meal_id: &str) -> bool {
        self.meals.contains_key(meal_id)
    }

    pub fn category_of(&self, meal_id: &str) -> &str {
        self.get(meal_id)
            .map(|entry| entry.category.as_str())
            .unwrap_or("Uncategorized")
    }

    /// Sorted, unique categories.
    pub fn categories(&self) -> Vec<&str> {
        self.meals
            .values()
            .map(|entry| entry.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn meals_in_category(&self, category: &str) -> Vec<&MealCatalogEntry> {
        self.meals
            .values()
            .filter(|entry| entry.category.eq_ignore_ascii_case(category))
            .collect()
    }

    pub fn meal_ids(&self) -> impl Iterator<Item = &str> {
        self.meals.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &MealCatalogEntry> {
        self.meals.values()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
