use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::catalog::MealCatalog;
use crate::models::MealRequest;
use crate::optimizer::constants::DEFAULT_SERVINGS;

/// Required ingredients for a request, plus the meal ids the catalog lacked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Raw ingredient name to total quantity, summed by exact name.
    pub required: BTreeMap<String, f64>,
    pub unknown_meals: Vec<String>,
}

/// Servings multiplier: missing or non-positive servings count as one.
#[inline]
pub fn servings_multiplier(servings: Option<i64>) -> f64 {
    match servings {
        Some(n) if n > 0 => n as f64,
        _ => DEFAULT_SERVINGS,
    }
}

/// Expand selected meals into one required-ingredient map.
pub fn aggregate(request: &MealRequest, catalog: &MealCatalog) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for (meal_id, servings) in request.iter() {
        let Some(ingredients) = catalog.ingredients(meal_id) else {
            warn!(meal_id, "no catalog entry for requested meal");
            aggregation.unknown_meals.push(meal_id.to_string());
            continue;
        };

        let multiplier = servings_multiplier(servings);
        debug!(meal_id, multiplier, ingredients = ingredients.len(), "expanding meal");

        for (ingredient, per_serving) in ingredients {
            *aggregation
                .required
                .entry(ingredient.clone())
                .or_insert(0.0) += per_serving * multiplier;
        }
    }

    aggregation
}
