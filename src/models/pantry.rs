use serde::{Deserialize, Serialize};

/// Generic count unit assumed when a pantry row carries no unit.
pub const DEFAULT_PANTRY_UNIT: &str = "unit";

/// One row of a user's pantry snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryEntry {
    pub name: String,

    #[serde(default)]
    pub quantity: f64,

    #[serde(default)]
    pub unit: Option<String>,
}

impl PantryEntry {
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: Some(unit.to_string()),
        }
    }

    /// The row's unit, falling back to the generic count unit.
    pub fn unit_or_default(&self) -> &str {
        match self.unit.as_deref() {
            Some(unit) if !unit.trim().is_empty() => unit,
            _ => DEFAULT_PANTRY_UNIT,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.quantity.is_finite() && self.quantity >= 0.0
    }
}
