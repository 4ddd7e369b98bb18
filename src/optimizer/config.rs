use serde::{Deserialize, Serialize};

use crate::matching::UnitConverter;
use crate::optimizer::constants::{DEFAULT_STORE, DEFAULT_UNIT_PRICE};

/// How pantry rows are shared between required ingredients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PantryAllocation {
    /// Every ingredient reads the full pantry row; one row may cover several.
    #[default]
    Independent,

    /// Rows are drawn down as ingredients claim them, in ingredient-name order.
    Consume,
}

/// What a pantry quantity is worth when its unit is in none of the unit tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitMismatchPolicy {
    /// Counts as nothing on hand, so the full need is bought.
    #[default]
    TreatAsInsufficient,

    /// Compares raw numbers regardless of unit.
    AssumeSameUnit,
}

/// Policy knobs for one optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub default_store: String,
    pub default_unit_price: f64,
    pub pantry_allocation: PantryAllocation,
    pub unit_mismatch: UnitMismatchPolicy,

    /// Allow weight/volume conversion at a density of 1 g/ml.
    pub approximate_density: bool,

    /// A count-like pantry row with at least one on hand covers any need.
    pub count_like_any_is_enough: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            default_store: DEFAULT_STORE.to_string(),
            default_unit_price: DEFAULT_UNIT_PRICE,
            pantry_allocation: PantryAllocation::default(),
            unit_mismatch: UnitMismatchPolicy::default(),
            approximate_density: true,
            count_like_any_is_enough: true,
        }
    }
}

impl OptimizerConfig {
    pub fn converter(&self) -> UnitConverter {
        UnitConverter::new(self.approximate_density)
    }

    pub fn is_valid(&self) -> bool {
        self.default_unit_price.is_finite() && self.default_unit_price >= 0.0
    }
}
