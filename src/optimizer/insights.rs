use std::collections::BTreeMap;

use crate::models::{OptimizeResult, ShoppingItem};
use crate::optimizer::constants::BREAKDOWN_MAX_STORES;
use crate::optimizer::deals::PricedShortfall;

/// Build the priced shopping list, per-store totals and advisory notes.
pub fn assemble(priced: &[PricedShortfall], covered_names: Vec<String>) -> OptimizeResult {
    let items: Vec<ShoppingItem> = priced.iter().map(shopping_item).collect();

    let mut cost_by_store: BTreeMap<String, f64> = BTreeMap::new();
    for item in &items {
        *cost_by_store.entry(item.store_id.clone()).or_insert(0.0) += item.price;
    }

    let notes = generate_notes(&items, covered_names.len(), &cost_by_store);

    OptimizeResult {
        items,
        covered_names,
        cost_by_store,
        notes,
        ..Default::default()
    }
}

fn shopping_item(priced: &PricedShortfall) -> ShoppingItem {
    let quantity = priced.shortfall.quantity;
    let info = priced.info;
    let original_price = info
        .original_price
        .filter(|_| info.has_promo)
        .map(|unit| unit * quantity);

    ShoppingItem {
        product_name: priced.shortfall.name.clone(),
        quantity,
        unit: priced.shortfall.unit.clone(),
        store_id: priced.store.clone(),
        price: info.price * quantity,
        original_price,
        savings: original_price.map(|original| (original - info.price * quantity).max(0.0)),
        has_deal: priced.has_deal(),
    }
}

/// Advisory text only; nothing reads these back.
pub fn generate_notes(
    items: &[ShoppingItem],
    pantry_used: usize,
    cost_by_store: &BTreeMap<String, f64>,
) -> Vec<String> {
    let mut notes = Vec::new();
    let count = items.len();

    if pantry_used > 0 {
        notes.push(format!(
            "Using {} item(s) from pantry - saving money!",
            pantry_used
        ));
    }
    if count == 0 {
        return notes;
    }

    let total_cost: f64 = cost_by_store.values().sum();
    let total_savings: f64 = items.iter().filter_map(|item| item.savings).sum();
    if total_savings > 0.0 {
        let percent = total_savings / (total_cost + total_savings) * 100.0;
        notes.push(format!(
            "Total savings: ${:.2} ({:.1}% off regular prices)",
            total_savings, percent
        ));
    }

    notes.extend(deal_coverage_note(items));

    match cost_by_store.len() {
        0 => {}
        1 => {
            if let Some(store) = cost_by_store.keys().next() {
                notes.push(format!(
                    "All items available at {} - one-stop shopping!",
                    store
                ));
            }
        }
        stores => {
            notes.extend(consolidation_tip(items, cost_by_store));
            if stores <= BREAKDOWN_MAX_STORES {
                notes.push(cost_breakdown(cost_by_store, total_cost));
            }
        }
    }

    if total_cost > 0.0 {
        notes.push(format!(
            "Average price per item: ${:.2}",
            total_cost / count as f64
        ));
        notes.push(format!(
            "Total shopping cost: ${:.2} for {} items",
            total_cost, count
        ));
    }

    notes
}

fn deal_coverage_note(items: &[ShoppingItem]) -> Option<String> {
    let count = items.len();
    let promos = items.iter().filter(|item| item.has_promo()).count();
    let found = items.iter().filter(|item| item.has_deal).count();

    if promos == count {
        Some(format!("All {} items have promotional deals!", promos))
    } else if promos > 0 {
        Some(format!(
            "{} out of {} items have promotional deals",
            promos, count
        ))
    } else if found == count {
        Some(format!(
            "Found prices for all {} items (no promotional deals available)",
            found
        ))
    } else if found > 0 {
        Some(format!("Found prices for {} out of {} items", found, count))
    } else {
        Some(format!(
            "No deals matched; default prices used for all {} items",
            count
        ))
    }
}

/// Suggest one trip when a single store already holds most of the list.
fn consolidation_tip(items: &[ShoppingItem], cost_by_store: &BTreeMap<String, f64>) -> Option<String> {
    let mut items_by_store: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *items_by_store.entry(item.store_id.as_str()).or_insert(0) += 1;
    }

    let mut busiest: Option<(&str, usize)> = None;
    for (&store, &n) in &items_by_store {
        if busiest.is_none_or(|(_, best)| n > best) {
            busiest = Some((store, n));
        }
    }
    let (store, at_store) = busiest?;
    if at_store * 2 <= items.len() {
        return None;
    }

    let store_cost = cost_by_store.get(store).copied().unwrap_or(0.0);
    let other_cost: f64 = cost_by_store
        .iter()
        .filter(|(name, _)| name.as_str() != store)
        .map(|(_, cost)| cost)
        .sum();
    if store_cost > 0.0 && other_cost > 0.0 {
        Some(format!(
            "Shopping tip: {} of {} items are at {} (consider consolidating trips)",
            at_store,
            items.len(),
            store
        ))
    } else {
        None
    }
}

fn cost_breakdown(cost_by_store: &BTreeMap<String, f64>, total_cost: f64) -> String {
    let mut stores: Vec<(&String, f64)> = cost_by_store.iter().map(|(s, c)| (s, *c)).collect();
    stores.sort_by(|a, b| b.1.total_cmp(&a.1));

    let parts: Vec<String> = stores
        .iter()
        .map(|(store, cost)| {
            let percent = if total_cost > 0.0 {
                cost / total_cost * 100.0
            } else {
                0.0
            };
            format!("{} ${:.2} ({:.0}%)", store, cost, percent)
        })
        .collect();

    format!("Cost breakdown: {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::DealTier;
    use crate::optimizer::deals::PriceInfo;
    use crate::optimizer::pantry::Shortfall;

    fn priced(name: &str, quantity: f64, store: &str, info: PriceInfo, matched: bool) -> PricedShortfall {
        PricedShortfall {
            shortfall: Shortfall {
                name: name.to_string(),
                quantity,
                unit: "unit".to_string(),
            },
            store: store.to_string(),
            info,
            tier: matched.then_some(DealTier::Exact),
        }
    }

    fn promo(price: f64, original: f64) -> PriceInfo {
        PriceInfo {
            price,
            original_price: Some(original),
            has_promo: true,
        }
    }

    #[test]
    fn test_promo_item_prices() {
        let result = assemble(&[priced("Eggs", 2.0, "Kroger", promo(3.5, 5.0), true)], vec![]);
        let item = &result.items[0];
        assert_eq!(item.price, 7.0);
        assert_eq!(item.original_price, Some(10.0));
        assert_eq!(item.savings, Some(3.0));
        assert!(item.has_deal);
        assert_eq!(result.notes[0], "Total savings: $3.00 (30.0% off regular prices)");
        assert_eq!(result.notes[1], "All 1 items have promotional deals!");
    }

    #[test]
    fn test_costs_summed_per_store() {
        let result = assemble(
            &[
                priced("Rice", 2.0, "Aldi", PriceInfo::fallback(1.5), true),
                priced("Beans", 1.0, "Aldi", PriceInfo::fallback(2.0), true),
                priced("Salsa", 1.0, "Target", PriceInfo::fallback(4.0), true),
            ],
            vec!["Salt".to_string()],
        );
        assert_eq!(result.cost_by_store["Aldi"], 5.0);
        assert_eq!(result.cost_by_store["Target"], 4.0);
        assert_eq!(
            result.notes,
            vec![
                "Using 1 item(s) from pantry - saving money!".to_string(),
                "Found prices for all 3 items (no promotional deals available)".to_string(),
                "Shopping tip: 2 of 3 items are at Aldi (consider consolidating trips)".to_string(),
                "Cost breakdown: Aldi $5.00 (56%), Target $4.00 (44%)".to_string(),
                "Average price per item: $3.00".to_string(),
                "Total shopping cost: $9.00 for 3 items".to_string(),
            ]
        );
    }

    #[test]
    fn test_breakdown_omitted_beyond_three_stores() {
        let stores = ["A", "B", "C", "D"];
        let items: Vec<PricedShortfall> = stores
            .iter()
            .map(|s| priced(s, 1.0, s, PriceInfo::fallback(1.0), true))
            .collect();
        let result = assemble(&items, vec![]);
        assert!(!result.notes.iter().any(|n| n.starts_with("Cost breakdown")));
        assert!(!result.notes.iter().any(|n| n.starts_with("Shopping tip")));
    }

    #[test]
    fn test_fallback_items_note() {
        let result = assemble(
            &[
                priced("Saffron", 1.0, "Walmart", PriceInfo::fallback(5.0), false),
                priced("Rice", 1.0, "Walmart", PriceInfo::fallback(2.0), true),
            ],
            vec![],
        );
        assert!(!result.items[0].has_deal);
        assert_eq!(result.notes[0], "Found prices for 1 out of 2 items");
        assert_eq!(result.notes[1], "All items available at Walmart - one-stop shopping!");
    }

    #[test]
    fn test_nothing_to_buy_has_no_cost_notes() {
        let result = assemble(&[], vec!["Eggs".to_string()]);
        assert_eq!(
            result.notes,
            vec!["Using 1 item(s) from pantry - saving money!".to_string()]
        );
        assert!(result.cost_by_store.is_empty());
    }
}
