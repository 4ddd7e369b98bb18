use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A priced line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub store_id: String,

    /// Effective unit price times quantity.
    pub price: f64,

    /// Regular unit price times quantity, present only when a promotion applied.
    pub original_price: Option<f64>,

    pub savings: Option<f64>,

    /// False only when the item fell back to the default store and price.
    pub has_deal: bool,
}

impl ShoppingItem {
    #[inline]
    pub fn has_promo(&self) -> bool {
        self.savings.is_some()
    }
}

/// Data-quality conditions met while optimizing. None of them abort the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OptimizeWarning {
    UnknownMeal {
        meal_id: String,
    },
    UnparsableUnit {
        ingredient: String,
        pantry_item: String,
        pantry_unit: String,
        needed_unit: String,
    },
    /// Both units are known but cannot be converted; raw quantities were compared.
    IncompatibleUnits {
        ingredient: String,
        pantry_item: String,
        pantry_unit: String,
        needed_unit: String,
    },
    NoDealMatch {
        product: String,
    },
}

impl fmt::Display for OptimizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizeWarning::UnknownMeal { meal_id } => {
                write!(f, "unknown meal '{}' was skipped", meal_id)
            }
            OptimizeWarning::UnparsableUnit {
                ingredient,
                pantry_item,
                pantry_unit,
                needed_unit,
            } => write!(
                f,
                "cannot compare pantry '{}' ({}) with '{}' ({})",
                pantry_item, pantry_unit, ingredient, needed_unit
            ),
            OptimizeWarning::IncompatibleUnits {
                ingredient,
                pantry_item,
                pantry_unit,
                needed_unit,
            } => write!(
                f,
                "pantry '{}' ({}) compared with '{}' ({}) without conversion",
                pantry_item, pantry_unit, ingredient, needed_unit
            ),
            OptimizeWarning::NoDealMatch { product } => {
                write!(f, "no deal found for '{}', default price used", product)
            }
        }
    }
}

/// Everything an optimize call produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResult {
    pub items: Vec<ShoppingItem>,

    /// Display names of pantry rows that cover a required ingredient.
    pub covered_names: Vec<String>,

    /// Required ingredient names the pantry satisfied.
    #[serde(default)]
    pub covered_ingredients: Vec<String>,

    pub cost_by_store: BTreeMap<String, f64>,

    pub notes: Vec<String>,

    #[serde(default)]
    pub warnings: Vec<OptimizeWarning>,
}

impl OptimizeResult {
    pub fn total_cost(&self) -> f64 {
        self.cost_by_store.values().sum()
    }

    pub fn total_savings(&self) -> f64 {
        self.items.iter().filter_map(|item| item.savings).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.covered_names.is_empty()
    }
}
