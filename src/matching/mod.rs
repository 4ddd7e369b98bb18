pub mod normalize;
pub mod tiers;
pub mod units;
pub mod variations;

pub use normalize::{base_name, normalize};
pub use tiers::{DealTier, Matcher, NameForms, PantryTier};
pub use units::{
    approximate_density_conversion, are_compatible, canonical_unit, convert, infer_unit, is_count_like,
    Conversion, UnitCategory, UnitConverter,
};
pub use variations::matches_variation;
