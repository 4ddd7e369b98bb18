pub mod aggregate;
pub mod config;
pub mod constants;
pub mod deals;
pub mod insights;
pub mod pantry;

pub use aggregate::{aggregate, servings_multiplier, Aggregation};
pub use config::{OptimizerConfig, PantryAllocation, UnitMismatchPolicy};
pub use constants::*;
pub use deals::{display_store_name, price_shortfalls, DealIndex, DealMatch, PriceInfo};
pub use insights::{assemble, generate_notes};
pub use pantry::{count_like_covers, resolve, Coverage, PantryResolution, Shortfall};

use tracing::info;

use crate::catalog::MealCatalog;
use crate::error::{CartError, Result};
use crate::models::{Deal, MealRequest, OptimizeResult, OptimizeWarning, PantryEntry};

/// The shopping list optimization engine.
///
/// Pure and synchronous: every call works on the snapshots it is handed, so
/// one optimizer may serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Turn a meal request into a priced, store-assigned shopping list.
    ///
    /// Only structurally invalid snapshots are errors. Unknown meals,
    /// unconvertible units and unmatched products come back as warnings.
    pub fn optimize(
        &self,
        request: &MealRequest,
        catalog: &MealCatalog,
        pantry: &[PantryEntry],
        deals: &[Deal],
    ) -> Result<OptimizeResult> {
        self.validate(pantry, deals)?;

        let Aggregation {
            required,
            unknown_meals,
        } = aggregate(request, catalog);
        info!(
            meals = request.len(),
            ingredients = required.len(),
            pantry = pantry.len(),
            deals = deals.len(),
            "optimizing shopping list"
        );

        let mut warnings: Vec<OptimizeWarning> = unknown_meals
            .into_iter()
            .map(|meal_id| OptimizeWarning::UnknownMeal { meal_id })
            .collect();

        let resolution = resolve(&required, pantry, &self.config);
        let covered_names = resolution.covered_names();
        let covered_ingredients: Vec<String> = resolution
            .covered
            .iter()
            .map(|c| c.ingredient.clone())
            .collect();
        warnings.extend(resolution.warnings);

        let index = DealIndex::build(deals);
        let priced = price_shortfalls(resolution.shortfalls, &index, &self.config);
        warnings.extend(priced.warnings);

        let mut result = assemble(&priced.items, covered_names);
        result.covered_ingredients = covered_ingredients;
        result.warnings = warnings;

        info!(
            items = result.items.len(),
            covered = result.covered_ingredients.len(),
            total = result.total_cost(),
            "shopping list ready"
        );
        Ok(result)
    }

    fn validate(&self, pantry: &[PantryEntry], deals: &[Deal]) -> Result<()> {
        if !self.config.is_valid() {
            return Err(CartError::InvalidInput(format!(
                "default unit price must be a non-negative number, got {}",
                self.config.default_unit_price
            )));
        }
        if let Some(entry) = pantry.iter().find(|e| !e.is_valid()) {
            return Err(CartError::InvalidSnapshot(format!(
                "pantry item '{}' has invalid quantity {}",
                entry.name, entry.quantity
            )));
        }
        if let Some(deal) = deals.iter().find(|d| !d.is_valid()) {
            return Err(CartError::InvalidSnapshot(format!(
                "deal '{}' at '{}' has an invalid price",
                deal.product_name, deal.store_id
            )));
        }
        Ok(())
    }
}

/// Optimize with the default policies.
pub fn optimize(
    request: &MealRequest,
    catalog: &MealCatalog,
    pantry: &[PantryEntry],
    deals: &[Deal],
) -> Result<OptimizeResult> {
    Optimizer::default().optimize(request, catalog, pantry, deals)
}
