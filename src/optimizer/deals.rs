use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::matching::{DealTier, NameForms};
use crate::models::{Deal, OptimizeWarning};
use crate::optimizer::config::OptimizerConfig;
use crate::optimizer::constants::DEFAULT_STORE;
use crate::optimizer::pantry::Shortfall;

/// Per-unit pricing of one indexed deal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceInfo {
    /// Effective unit price: the promotion when one is active.
    pub price: f64,

    /// Regular unit price, kept only when a promotion undercuts it.
    pub original_price: Option<f64>,

    pub has_promo: bool,
}

impl PriceInfo {
    pub fn from_deal(deal: &Deal) -> Self {
        let has_promo = deal.has_promo();
        Self {
            price: deal.effective_price(),
            original_price: has_promo.then_some(deal.unit_price),
            has_promo,
        }
    }

    /// Regular-price fallback used when nothing matches.
    pub fn fallback(price: f64) -> Self {
        Self {
            price,
            original_price: None,
            has_promo: false,
        }
    }
}

#[derive(Debug, Clone)]
struct IndexedDeal {
    forms: NameForms,
    info: PriceInfo,
}

/// The cheapest deal found for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct DealMatch {
    pub store_id: String,
    pub product_name: String,
    pub info: PriceInfo,
    pub tier: DealTier,
}

/// Deals grouped by store, stores in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct DealIndex {
    stores: BTreeMap<String, Vec<IndexedDeal>>,
}

impl DealIndex {
    /// Index a deal snapshot. A product listed twice at one store keeps the
    /// cheaper effective price; the earlier listing wins a tie.
    pub fn build(deals: &[Deal]) -> Self {
        let mut stores: BTreeMap<String, Vec<IndexedDeal>> = BTreeMap::new();

        for deal in deals {
            let info = PriceInfo::from_deal(deal);
            let entries = stores.entry(deal.store_id.clone()).or_default();

            match entries
                .iter()
                .position(|entry| entry.forms.raw == deal.product_name)
            {
                Some(idx) => {
                    if info.price < entries[idx].info.price {
                        entries[idx].info = info;
                    }
                }
                None => entries.push(IndexedDeal {
                    forms: NameForms::new(&deal.product_name),
                    info,
                }),
            }
        }

        Self { stores }
    }

    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    pub fn len(&self) -> usize {
        self.stores.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cheapest match at the strongest tier that matches at all.
    ///
    /// Within a tier an equal price never displaces the first match, so ties
    /// go to the lowest store id.
    pub fn find_best(&self, product: &str) -> Option<DealMatch> {
        let forms = NameForms::new(product);

        DealTier::ALL.into_iter().find_map(|tier| {
            let mut best: Option<(&str, &IndexedDeal)> = None;
            for (store, entries) in &self.stores {
                for entry in entries.iter().filter(|e| tier.matches(&forms, &e.forms)) {
                    if best.is_none_or(|(_, current)| entry.info.price < current.info.price) {
                        best = Some((store, entry));
                    }
                }
            }
            best.map(|(store, entry)| DealMatch {
                store_id: store.to_string(),
                product_name: entry.forms.raw.clone(),
                info: entry.info,
                tier,
            })
        })
    }
}

/// Title-cased store name; blank names become `default`.
pub fn display_store_name(raw: &str, default: &str) -> String {
    let words: Vec<String> = raw
        .split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        default.to_string()
    } else {
        words.join(" ")
    }
}

/// A shortfall with its assigned store and unit pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedShortfall {
    pub shortfall: Shortfall,
    pub store: String,
    pub info: PriceInfo,

    /// `None` when the default store and price were used.
    pub tier: Option<DealTier>,
}

impl PricedShortfall {
    #[inline]
    pub fn has_deal(&self) -> bool {
        self.tier.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricedShortfalls {
    pub items: Vec<PricedShortfall>,
    pub warnings: Vec<OptimizeWarning>,
}

/// Assign every shortfall a store and price, falling back to the configured
/// default when no deal matches.
pub fn price_shortfalls(
    shortfalls: Vec<Shortfall>,
    index: &DealIndex,
    config: &OptimizerConfig,
) -> PricedShortfalls {
    let fallback_store = display_store_name(&config.default_store, DEFAULT_STORE);
    let mut priced = PricedShortfalls::default();

    for shortfall in shortfalls {
        let item = match index.find_best(&shortfall.name) {
            Some(found) => {
                debug!(
                    product = %shortfall.name,
                    deal = %found.product_name,
                    store = %found.store_id,
                    price = found.info.price,
                    tier = ?found.tier,
                    "deal match"
                );
                PricedShortfall {
                    store: display_store_name(&found.store_id, &fallback_store),
                    info: found.info,
                    tier: Some(found.tier),
                    shortfall,
                }
            }
            None => {
                warn!(
                    product = %shortfall.name,
                    stores = index.store_count(),
                    "no deal found, using default price"
                );
                priced.warnings.push(OptimizeWarning::NoDealMatch {
                    product: shortfall.name.clone(),
                });
                PricedShortfall {
                    store: fallback_store.clone(),
                    info: PriceInfo::fallback(config.default_unit_price),
                    tier: None,
                    shortfall,
                }
            }
        };
        priced.items.push(item);
    }

    priced
}
