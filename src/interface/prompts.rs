use dialoguer::{Confirm, Input, MultiSelect};
use strsim::jaro_winkler;

use crate::catalog::MealCatalog;
use crate::error::{CartError, Result};
use crate::models::MealRequest;

/// Similarity needed before a catalog meal is offered as a correction.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Closest catalog meal id to an unknown one, if any is close enough.
pub fn suggest_meal<'a>(catalog: &'a MealCatalog, meal_id: &str) -> Option<&'a str> {
    let wanted = meal_id.to_lowercase();
    catalog
        .meal_ids()
        .map(|id| (id, jaro_winkler(&id.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Prompt for servings of one meal.
pub fn prompt_servings(meal_id: &str) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt(format!("Servings of '{}'?", meal_id))
        .default("1".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| CartError::InvalidInput("Invalid number of servings".to_string()))
}

/// Pick meals from the catalog, then servings for each.
pub fn prompt_meal_selection(catalog: &MealCatalog) -> Result<MealRequest> {
    let options: Vec<String> = catalog
        .entries()
        .map(|entry| format!("{} ({})", entry.meal_id, entry.category))
        .collect();
    let ids: Vec<&str> = catalog.meal_ids().collect();

    let chosen = MultiSelect::new()
        .with_prompt("Select meals (space to toggle, enter to confirm)")
        .items(&options)
        .interact()?;

    let mut request = MealRequest::new();
    for idx in chosen {
        let meal_id = ids[idx];
        let servings = prompt_servings(meal_id)?;
        request.insert(meal_id, Some(servings));
    }

    Ok(request)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
