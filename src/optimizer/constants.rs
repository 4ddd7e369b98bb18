/// Store assigned when no deal matches a shortfall.
pub const DEFAULT_STORE: &str = "Walmart";

/// Unit price assumed when no deal matches a shortfall.
pub const DEFAULT_UNIT_PRICE: f64 = 5.0;

/// Servings multiplier used for missing or non-positive servings.
pub const DEFAULT_SERVINGS: f64 = 1.0;

/// On-hand quantity at which a count-like pantry row covers any need.
pub const COUNT_LIKE_MIN_ON_HAND: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Insight thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Per-store cost breakdown is shown only up to this many stores.
pub const BREAKDOWN_MAX_STORES: usize = 3;
