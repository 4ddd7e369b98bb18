use crate::catalog::MealCatalog;
use crate::matching::Conversion;
use crate::models::OptimizeResult;

/// Display a shopping list in a formatted table.
pub fn display_result(result: &OptimizeResult) {
    if result.is_empty() {
        println!("Nothing to buy (no meals selected or none found in the catalog).");
        display_warnings(result);
        return;
    }

    if !result.covered_names.is_empty() {
        println!();
        println!("=== From Your Pantry ===");
        println!();
        for name in &result.covered_names {
            println!("  {}", name);
        }
    }

    if !result.items.is_empty() {
        println!();
        println!("=== Shopping List ===");
        println!();

        // Find max product name length for alignment
        let max_name_len = result
            .items
            .iter()
            .map(|item| item.product_name.len())
            .max()
            .unwrap_or(10);

        for (i, item) in result.items.iter().enumerate() {
            let tag = match (item.savings, item.has_deal) {
                (Some(savings), _) => format!("  [Promo -${:.2}]", savings),
                (None, true) => "  [Deal]".to_string(),
                (None, false) => "  [Default price]".to_string(),
            };

            println!(
                "{:>3}. {:<width$} - {:>6.2} {:<5} @ {:<12} ${:>7.2}{}",
                i + 1,
                item.product_name,
                item.quantity,
                item.unit,
                item.store_id,
                item.price,
                tag,
                width = max_name_len
            );
        }

        println!();
        println!("--- By Store ---");
        for (store, cost) in &result.cost_by_store {
            println!("  {:<12} ${:.2}", store, cost);
        }
        println!("  {:<12} ${:.2}", "Total", result.total_cost());
        let savings = result.total_savings();
        if savings > 0.0 {
            println!("  {:<12} ${:.2}", "Saved", savings);
        }
    }

    if !result.notes.is_empty() {
        println!();
        println!("--- Notes ---");
        for note in &result.notes {
            println!("  {}", note);
        }
    }

    display_warnings(result);
    println!();
}

fn display_warnings(result: &OptimizeResult) {
    if result.warnings.is_empty() {
        return;
    }
    println!();
    println!("--- Warnings ---");
    for warning in &result.warnings {
        println!("  {}", warning);
    }
}

/// Display catalog meals grouped by category.
pub fn display_catalog(catalog: &MealCatalog, category: Option<&str>) {
    let categories: Vec<&str> = match category {
        Some(wanted) => catalog
            .categories()
            .into_iter()
            .filter(|c| c.eq_ignore_ascii_case(wanted))
            .collect(),
        None => catalog.categories(),
    };

    if categories.is_empty() {
        println!("No meals found{}.", category.map(|c| format!(" in '{}'", c)).unwrap_or_default());
        return;
    }

    for category in categories {
        let meals = catalog.meals_in_category(category);
        println!();
        println!("=== {} ({} meals) ===", category, meals.len());
        println!();
        for meal in meals {
            let ingredients: Vec<String> = meal
                .ingredients
                .iter()
                .map(|(name, qty)| format!("{} {}", qty, name))
                .collect();
            println!("  {} - {}", meal.meal_id, ingredients.join(", "));
        }
    }
    println!();
}

/// Display the outcome of a unit conversion.
pub fn display_conversion(quantity: f64, from: &str, to: &str, conversion: Option<Conversion>) {
    match conversion {
        Some(c) if c.approximate => println!(
            "{} {} ~= {:.4} {} (approximate)",
            quantity, from, c.quantity, to
        ),
        Some(c) => println!("{} {} = {:.4} {}", quantity, from, c.quantity, to),
        None => println!("Cannot convert {} to {}: incompatible units.", from, to),
    }
}
