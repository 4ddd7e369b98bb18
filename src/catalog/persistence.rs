use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::MealCatalog;
use crate::error::Result;
use crate::models::{Deal, MealCatalogEntry, MealRequest, OptimizeResult, PantryEntry};
use crate::optimizer::OptimizerConfig;

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Load a catalog from a JSON list of entries.
///
/// Duplicate meal ids are resolved by the last occurrence.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let entries: Vec<MealCatalogEntry> = read_json(path)?;
    MealCatalog::new(entries)
}

/// Load a pantry snapshot from a JSON list.
pub fn load_pantry<P: AsRef<Path>>(path: P) -> Result<Vec<PantryEntry>> {
    let pantry: Vec<PantryEntry> = read_json(path)?;
    debug!(rows = pantry.len(), "loaded pantry snapshot");
    Ok(pantry)
}

/// Load a deal snapshot from JSON, or from CSV when the extension says so.
///
/// CSV columns: `store_id,product_name,unit_price,promo_price` with an empty
/// promo cell for no promotion.
pub fn load_deals<P: AsRef<Path>>(path: P) -> Result<Vec<Deal>> {
    let path = path.as_ref();
    let deals: Vec<Deal> = if is_csv(path) {
        let mut rdr = csv::Reader::from_path(path)?;
        rdr.deserialize::<Deal>()
            .collect::<std::result::Result<Vec<_>, _>>()?
    } else {
        read_json(path)?
    };
    debug!(deals = deals.len(), "loaded deal snapshot");
    Ok(deals)
}

/// Load a `{mealId: servings}` request.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<MealRequest> {
    read_json(path)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<OptimizerConfig> {
    read_json(path)
}

/// Save an optimize result as pretty JSON.
pub fn save_result<P: AsRef<Path>>(path: P, result: &OptimizeResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the shopping list as CSV, one row per item.
pub fn write_shopping_csv<P: AsRef<Path>>(path: P, result: &OptimizeResult) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "product",
        "quantity",
        "unit",
        "store",
        "price",
        "original_price",
        "savings",
        "has_deal",
    ])?;

    let money = |value: Option<f64>| value.map(|v| format!("{:.2}", v)).unwrap_or_default();

    for item in &result.items {
        wtr.write_record([
            item.product_name.clone(),
            format!("{:.2}", item.quantity),
            item.unit.clone(),
            item.store_id.clone(),
            format!("{:.2}", item.price),
            money(item.original_price),
            money(item.savings),
            item.has_deal.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
