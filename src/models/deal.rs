use serde::{Deserialize, Serialize};

/// A store's current price for a product, optionally with a promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    #[serde(alias = "store_id")]
    pub store_id: String,

    #[serde(alias = "product_name")]
    pub product_name: String,

    /// Regular shelf price per unit.
    #[serde(alias = "unit_price")]
    pub unit_price: f64,

    #[serde(default, alias = "promo_price")]
    pub promo_price: Option<f64>,
}

impl Deal {
    pub fn new(store_id: &str, product_name: &str, unit_price: f64) -> Self {
        Self {
            store_id: store_id.to_string(),
            product_name: product_name.to_string(),
            unit_price,
            promo_price: None,
        }
    }

    pub fn with_promo(mut self, promo_price: f64) -> Self {
        self.promo_price = Some(promo_price);
        self
    }

    /// A promotion is active only when it undercuts the regular price.
    #[inline]
    pub fn has_promo(&self) -> bool {
        matches!(self.promo_price, Some(promo) if promo < self.unit_price)
    }

    /// Price actually paid per unit.
    #[inline]
    pub fn effective_price(&self) -> f64 {
        match self.promo_price {
            Some(promo) if promo < self.unit_price => promo,
            _ => self.unit_price,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.unit_price.is_finite()
            && self.unit_price >= 0.0
            && self
                .promo_price
                .is_none_or(|promo| promo.is_finite() && promo >= 0.0)
    }
}
