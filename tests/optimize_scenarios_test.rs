use assert_float_eq::assert_float_absolute_eq;

use cart_optimizer::models::{Deal, MealCatalogEntry, MealRequest, OptimizeWarning, PantryEntry};
use cart_optimizer::optimizer::{
    aggregate, optimize, Optimizer, OptimizerConfig, PantryAllocation, UnitMismatchPolicy,
};
use cart_optimizer::MealCatalog;

fn lasagna_catalog() -> MealCatalog {
    MealCatalog::new(vec![MealCatalogEntry::new(
        "Lasagna",
        "Italian",
        &[("Ground Beef", 1.0), ("Mozzarella", 0.5)],
    )])
    .unwrap()
}

fn lasagna_for_two() -> MealRequest {
    MealRequest::from_pairs(&[("Lasagna", 2)])
}

#[test]
fn test_lasagna_aggregates_by_servings() {
    let aggregation = aggregate(&lasagna_for_two(), &lasagna_catalog());
    assert_eq!(aggregation.required.len(), 2);
    assert_float_absolute_eq!(aggregation.required["Ground Beef"], 2.0, 1e-9);
    assert_float_absolute_eq!(aggregation.required["Mozzarella"], 1.0, 1e-9);
    assert!(aggregation.unknown_meals.is_empty());
}

#[test]
fn test_pantry_beef_covered_and_mozzarella_bought_at_cheapest_store() {
    let pantry = vec![PantryEntry::new("Ground Beef", 3.0, "lb")];
    let deals = vec![
        Deal::new("Walmart", "Mozzarella", 4.0),
        Deal::new("Target", "Mozzarella", 4.5),
    ];

    let result = optimize(&lasagna_for_two(), &lasagna_catalog(), &pantry, &deals).unwrap();

    assert_eq!(result.covered_names, vec!["Ground Beef".to_string()]);
    assert_eq!(result.covered_ingredients, vec!["Ground Beef".to_string()]);
    assert!(!result.items.iter().any(|i| i.product_name == "Ground Beef"));

    assert_eq!(result.items.len(), 1);
    let mozzarella = &result.items[0];
    assert_eq!(mozzarella.product_name, "Mozzarella");
    assert_eq!(mozzarella.store_id, "Walmart");
    assert_float_absolute_eq!(mozzarella.price, 4.0, 1e-9);
    assert!(mozzarella.has_deal);
    assert!(!mozzarella.has_promo());
    assert_eq!(mozzarella.original_price, None);
    assert_eq!(mozzarella.savings, None);

    assert_eq!(result.cost_by_store.len(), 1);
    assert_float_absolute_eq!(result.cost_by_store["Walmart"], 4.0, 1e-9);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_promo_price_quantity_two() {
    let catalog = MealCatalog::new(vec![MealCatalogEntry::new(
        "Cheese Plate",
        "Snacks",
        &[("Brie", 2.0)],
    )])
    .unwrap();
    let request = MealRequest::from_pairs(&[("Cheese Plate", 1)]);
    let deals = vec![Deal::new("kroger", "Brie", 5.0).with_promo(3.5)];

    let result = optimize(&request, &catalog, &[], &deals).unwrap();
    let item = &result.items[0];

    assert_eq!(item.store_id, "Kroger");
    assert_float_absolute_eq!(item.price, 7.0, 1e-9);
    assert_float_absolute_eq!(item.original_price.unwrap(), 10.0, 1e-9);
    assert_float_absolute_eq!(item.savings.unwrap(), 3.0, 1e-9);
    assert!(result.notes.iter().any(|n| n.starts_with("Total savings: $3.00")));
}

#[test]
fn test_empty_request_yields_empty_result() {
    let pantry = vec![PantryEntry::new("Ground Beef", 3.0, "lb")];
    let deals = vec![Deal::new("Walmart", "Mozzarella", 4.0)];

    let result = optimize(&MealRequest::new(), &lasagna_catalog(), &pantry, &deals).unwrap();

    assert!(result.items.is_empty());
    assert!(result.covered_names.is_empty());
    assert!(result.cost_by_store.is_empty());
    assert!(result.notes.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_unknown_meal_and_unmatched_product_are_warnings() {
    let request = MealRequest::from_pairs(&[("Lasagna", 1), ("Moussaka", 3)]);
    let result = optimize(&request, &lasagna_catalog(), &[], &[]).unwrap();

    assert_eq!(result.items.len(), 2);
    for item in &result.items {
        assert_eq!(item.store_id, "Walmart");
        assert!(!item.has_deal);
        assert_float_absolute_eq!(item.price, 5.0 * item.quantity, 1e-9);
    }
    assert!(result.warnings.contains(&OptimizeWarning::UnknownMeal {
        meal_id: "Moussaka".to_string()
    }));
    assert!(result.warnings.contains(&OptimizeWarning::NoDealMatch {
        product: "Mozzarella".to_string()
    }));
    assert!(result
        .notes
        .contains(&"No deals matched; default prices used for all 2 items".to_string()));
}

#[test]
fn test_non_positive_servings_count_as_one() {
    let request = MealRequest::from_pairs(&[("Lasagna", 0)]);
    let aggregation = aggregate(&request, &lasagna_catalog());
    assert_float_absolute_eq!(aggregation.required["Ground Beef"], 1.0, 1e-9);
}

#[test]
fn test_pantry_in_grams_converts_to_pounds() {
    // 1 kg is a little over 2.2 lb.
    let pantry = vec![PantryEntry::new("ground beef", 1.0, "kg")];
    let result = optimize(&lasagna_for_two(), &lasagna_catalog(), &pantry, &[]).unwrap();
    assert_eq!(result.covered_names, vec!["ground beef".to_string()]);
}

#[test]
fn test_unitless_pantry_row_covers_weight_need() {
    let pantry = vec![PantryEntry {
        name: "Ground Beef".to_string(),
        quantity: 5.0,
        unit: None,
    }];
    let result = optimize(&lasagna_for_two(), &lasagna_catalog(), &pantry, &[]).unwrap();

    assert_eq!(result.covered_ingredients, vec!["Ground Beef".to_string()]);
    assert!(!result.items.iter().any(|i| i.product_name == "Ground Beef"));
    assert!(result
        .warnings
        .iter()
        .any(|w| matches!(w, OptimizeWarning::IncompatibleUnits { pantry_unit, needed_unit, .. }
            if pantry_unit == "unit" && needed_unit == "lb")));
    assert!(!result
        .warnings
        .iter()
        .any(|w| matches!(w, OptimizeWarning::UnparsableUnit { .. })));
}

#[test]
fn test_unit_mismatch_policy_is_configurable() {
    let pantry = vec![PantryEntry::new("Ground Beef", 3.0, "tray")];

    let strict = optimize(&lasagna_for_two(), &lasagna_catalog(), &pantry, &[]).unwrap();
    assert!(strict.covered_names.is_empty());
    assert!(strict
        .warnings
        .iter()
        .any(|w| matches!(w, OptimizeWarning::UnparsableUnit { pantry_unit, .. } if pantry_unit == "tray")));

    let lenient = Optimizer::new(OptimizerConfig {
        unit_mismatch: UnitMismatchPolicy::AssumeSameUnit,
        ..Default::default()
    })
    .optimize(&lasagna_for_two(), &lasagna_catalog(), &pantry, &[])
    .unwrap();
    assert_eq!(lenient.covered_names, vec!["Ground Beef".to_string()]);
}

#[test]
fn test_consume_allocation_prevents_double_counting() {
    let catalog = MealCatalog::new(vec![MealCatalogEntry::new(
        "Stir Fry",
        "Asian",
        &[("Chicken Breast", 1.0), ("Chicken Thigh", 1.0)],
    )])
    .unwrap();
    let request = MealRequest::from_pairs(&[("Stir Fry", 1)]);
    let pantry = vec![PantryEntry::new("Chicken", 1.5, "lb")];

    let shared = optimize(&request, &catalog, &pantry, &[]).unwrap();
    assert_eq!(shared.covered_ingredients.len(), 2);

    let consumed = Optimizer::new(OptimizerConfig {
        pantry_allocation: PantryAllocation::Consume,
        ..Default::default()
    })
    .optimize(&request, &catalog, &pantry, &[])
    .unwrap();
    assert_eq!(consumed.covered_ingredients, vec!["Chicken Breast".to_string()]);
    assert_eq!(consumed.items.len(), 1);
    assert_eq!(consumed.items[0].product_name, "Chicken Thigh");
    assert_float_absolute_eq!(consumed.items[0].quantity, 0.5, 1e-9);
}

#[test]
fn test_builtin_catalog_end_to_end() {
    let catalog = MealCatalog::builtin();
    let request = MealRequest::from_pairs(&[("Lasagna", 2)]);
    let deals = vec![
        Deal::new("walmart", "Ground Beef 80/20", 5.49),
        Deal::new("target", "Mozzarella Cheese", 3.99).with_promo(2.99),
        Deal::new("aldi", "Lasagna Noodles", 1.79),
    ];

    let result = optimize(&request, &catalog, &[], &deals).unwrap();
    let stores: Vec<&str> = result.items.iter().map(|i| i.store_id.as_str()).collect();

    assert!(stores.iter().all(|s| ["Walmart", "Target", "Aldi"].contains(s)));
    let total: f64 = result.items.iter().map(|i| i.price).sum();
    assert_float_absolute_eq!(result.total_cost(), total, 1e-9);
}
