use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::matching::units::category;
use crate::matching::{canonical_unit, infer_unit, is_count_like, NameForms, PantryTier};
use crate::models::{OptimizeWarning, PantryEntry};
use crate::optimizer::config::{OptimizerConfig, PantryAllocation, UnitMismatchPolicy};
use crate::optimizer::constants::COUNT_LIKE_MIN_ON_HAND;

/// Portion of a required ingredient the pantry does not cover.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortfall {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// A required ingredient satisfied from the pantry.
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    pub ingredient: String,
    pub pantry_name: String,
    pub tier: PantryTier,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PantryResolution {
    pub covered: Vec<Coverage>,
    pub shortfalls: Vec<Shortfall>,
    pub warnings: Vec<OptimizeWarning>,
}

impl PantryResolution {
    /// Pantry row names that cover something, first use first, without repeats.
    pub fn covered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for coverage in &self.covered {
            if !names.contains(&coverage.pantry_name) {
                names.push(coverage.pantry_name.clone());
            }
        }
        names
    }
}

/// Count-like sufficiency: enough on hand, or at least one of the item.
///
/// A loaf on the shelf is taken to satisfy "4 bread" in a recipe. This is a
/// usability policy, not arithmetic; disable it with
/// `OptimizerConfig::count_like_any_is_enough`.
pub fn count_like_covers(available: f64, needed: f64) -> bool {
    available >= needed || available >= COUNT_LIKE_MIN_ON_HAND
}

struct PantryRow<'a> {
    forms: NameForms,
    entry: &'a PantryEntry,
    remaining: f64,
    drawn: bool,
}

/// How much of a pantry row is usable for one ingredient, in the needed unit.
struct Availability {
    quantity: f64,
    count_like: bool,
}

struct PantryMatcher<'a> {
    rows: Vec<PantryRow<'a>>,
    config: &'a OptimizerConfig,
}

impl<'a> PantryMatcher<'a> {
    fn new(pantry: &'a [PantryEntry], config: &'a OptimizerConfig) -> Self {
        let rows = pantry
            .iter()
            .map(|entry| PantryRow {
                forms: NameForms::new(&entry.name),
                entry,
                remaining: entry.quantity,
                drawn: false,
            })
            .collect();
        Self { rows, config }
    }

    /// Rows used up under `Consume` step aside so another row can match.
    fn is_exhausted(&self, row: &PantryRow<'_>) -> bool {
        self.config.pantry_allocation == PantryAllocation::Consume
            && row.drawn
            && row.remaining <= 0.0
    }

    /// First row matching at the strongest tier, scanning rows in order.
    fn find(&self, ingredient: &NameForms) -> Option<(usize, PantryTier)> {
        PantryTier::ALL.into_iter().find_map(|tier| {
            self.rows
                .iter()
                .position(|row| !self.is_exhausted(row) && tier.matches(ingredient, &row.forms))
                .map(|idx| (idx, tier))
        })
    }

    fn availability(
        &self,
        row: &PantryRow<'_>,
        ingredient: &str,
        needed_unit: &str,
        warnings: &mut Vec<OptimizeWarning>,
    ) -> Availability {
        let pantry_unit = row.entry.unit_or_default();
        let on_hand = row.remaining;

        if is_count_like(pantry_unit) && is_count_like(needed_unit) {
            return Availability {
                quantity: on_hand,
                count_like: true,
            };
        }
        if canonical_unit(pantry_unit) == canonical_unit(needed_unit) {
            return Availability {
                quantity: on_hand,
                count_like: false,
            };
        }

        let quantity = match self.config.converter().convert(on_hand, pantry_unit, needed_unit) {
            Some(conversion) => {
                if conversion.approximate {
                    debug!(
                        ingredient,
                        pantry_unit, needed_unit, "approximate unit conversion applied"
                    );
                }
                conversion.quantity
            }
            // Both units are known but belong to different categories, e.g. a
            // unitless pantry row against a weight need: compare raw numbers.
            None if category(pantry_unit).is_some() && category(needed_unit).is_some() => {
                debug!(
                    ingredient,
                    pantry_unit, needed_unit, "incompatible units compared as-is"
                );
                warnings.push(OptimizeWarning::IncompatibleUnits {
                    ingredient: ingredient.to_string(),
                    pantry_item: row.entry.name.clone(),
                    pantry_unit: pantry_unit.to_string(),
                    needed_unit: needed_unit.to_string(),
                });
                on_hand
            }
            None => {
                warn!(
                    ingredient,
                    pantry_item = %row.entry.name,
                    pantry_unit,
                    needed_unit,
                    "pantry unit cannot be converted"
                );
                warnings.push(OptimizeWarning::UnparsableUnit {
                    ingredient: ingredient.to_string(),
                    pantry_item: row.entry.name.clone(),
                    pantry_unit: pantry_unit.to_string(),
                    needed_unit: needed_unit.to_string(),
                });
                match self.config.unit_mismatch {
                    UnitMismatchPolicy::AssumeSameUnit => on_hand,
                    UnitMismatchPolicy::TreatAsInsufficient => 0.0,
                }
            }
        };

        Availability {
            quantity,
            count_like: false,
        }
    }

    fn is_sufficient(&self, available: &Availability, needed: f64) -> bool {
        if available.count_like && self.config.count_like_any_is_enough {
            count_like_covers(available.quantity, needed)
        } else {
            available.quantity >= needed
        }
    }

    /// Draw down a row by the share of its usable quantity that was used.
    fn consume(&mut self, idx: usize, available: f64, used: f64) {
        if self.config.pantry_allocation != PantryAllocation::Consume {
            return;
        }
        let row = &mut self.rows[idx];
        row.drawn = true;
        if available <= 0.0 {
            return;
        }
        let fraction = (used / available).clamp(0.0, 1.0);
        row.remaining = (row.remaining - row.remaining * fraction).max(0.0);
        if fraction >= 1.0 {
            row.remaining = 0.0;
        }
    }
}

/// Split required ingredients into pantry-covered ones and shortfalls.
///
/// Ingredients are visited in name order, which only matters under
/// `PantryAllocation::Consume`.
pub fn resolve(
    required: &BTreeMap<String, f64>,
    pantry: &[PantryEntry],
    config: &OptimizerConfig,
) -> PantryResolution {
    let mut matcher = PantryMatcher::new(pantry, config);
    let mut resolution = PantryResolution::default();

    for (ingredient, &needed) in required {
        let needed_unit = infer_unit(ingredient);
        let forms = NameForms::new(ingredient);

        let Some((idx, tier)) = matcher.find(&forms) else {
            resolution.shortfalls.push(Shortfall {
                name: ingredient.clone(),
                quantity: needed,
                unit: needed_unit.to_string(),
            });
            continue;
        };

        let row = &matcher.rows[idx];
        let pantry_name = row.entry.name.clone();
        let available =
            matcher.availability(row, ingredient, needed_unit, &mut resolution.warnings);
        debug!(
            ingredient = %ingredient,
            pantry_item = %pantry_name,
            ?tier,
            have = available.quantity,
            need = needed,
            "pantry match"
        );

        if matcher.is_sufficient(&available, needed) {
            matcher.consume(idx, available.quantity, needed);
            resolution.covered.push(Coverage {
                ingredient: ingredient.clone(),
                pantry_name,
                tier,
            });
        } else {
            matcher.consume(idx, available.quantity, available.quantity);
            resolution.shortfalls.push(Shortfall {
                name: ingredient.clone(),
                quantity: (needed - available.quantity).max(0.0),
                unit: needed_unit.to_string(),
            });
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_sufficient_pantry_covers() {
        let pantry = vec![PantryEntry::new("Ground Beef", 3.0, "lb")];
        let res = resolve(&required(&[("Ground Beef", 2.0)]), &pantry, &OptimizerConfig::default());
        assert_eq!(res.covered.len(), 1);
        assert_eq!(res.covered[0].tier, PantryTier::Exact);
        assert_eq!(res.covered_names(), vec!["Ground Beef".to_string()]);
        assert!(res.shortfalls.is_empty());
    }

    #[test]
    fn test_partial_pantry_leaves_shortfall() {
        let pantry = vec![PantryEntry::new("ground beef", 0.5, "lb")];
        let res = resolve(&required(&[("Ground Beef", 2.0)]), &pantry, &OptimizerConfig::default());
        assert!(res.covered.is_empty());
        assert_eq!(res.shortfalls[0].quantity, 1.5);
        assert_eq!(res.shortfalls[0].unit, "lb");
    }

    #[test]
    fn test_converts_pantry_units() {
        // 1000 g is about 2.2 lb.
        let pantry = vec![PantryEntry::new("Chicken Breast", 1000.0, "g")];
        let res = resolve(
            &required(&[("Chicken Breast", 2.0)]),
            &pantry,
            &OptimizerConfig::default(),
        );
        assert_eq!(res.covered.len(), 1);
    }

    #[test]
    fn test_count_like_any_is_enough() {
        let pantry = vec![PantryEntry::new("Rye Bread", 1.0, "loaf")];
        let need = required(&[("Bread", 4.0)]);

        let res = resolve(&need, &pantry, &OptimizerConfig::default());
        assert_eq!(res.covered_names(), vec!["Rye Bread".to_string()]);

        let strict = OptimizerConfig {
            count_like_any_is_enough: false,
            ..Default::default()
        };
        let res = resolve(&need, &pantry, &strict);
        assert_eq!(res.shortfalls[0].quantity, 3.0);
    }

    #[test]
    fn test_unit_mismatch_policies() {
        let pantry = vec![PantryEntry::new("Ground Beef", 5.0, "handful")];
        let need = required(&[("Ground Beef", 2.0)]);

        let res = resolve(&need, &pantry, &OptimizerConfig::default());
        assert_eq!(res.shortfalls[0].quantity, 2.0);
        assert!(matches!(
            res.warnings[0],
            OptimizeWarning::UnparsableUnit { .. }
        ));

        let lenient = OptimizerConfig {
            unit_mismatch: UnitMismatchPolicy::AssumeSameUnit,
            ..Default::default()
        };
        let res = resolve(&need, &pantry, &lenient);
        assert_eq!(res.covered.len(), 1);
    }

    #[test]
    fn test_unitless_row_compares_raw_against_weight() {
        let pantry = vec![PantryEntry {
            name: "Ground Beef".to_string(),
            quantity: 5.0,
            unit: None,
        }];
        let res = resolve(&required(&[("Ground Beef", 2.0)]), &pantry, &OptimizerConfig::default());
        assert_eq!(res.covered_names(), vec!["Ground Beef".to_string()]);
        assert!(res.shortfalls.is_empty());
        assert_eq!(
            res.warnings,
            vec![OptimizeWarning::IncompatibleUnits {
                ingredient: "Ground Beef".to_string(),
                pantry_item: "Ground Beef".to_string(),
                pantry_unit: "unit".to_string(),
                needed_unit: "lb".to_string(),
            }]
        );

        let short = vec![PantryEntry {
            name: "Ground Beef".to_string(),
            quantity: 0.5,
            unit: None,
        }];
        let res = resolve(&required(&[("Ground Beef", 2.0)]), &short, &OptimizerConfig::default());
        assert_eq!(res.shortfalls[0].quantity, 1.5);
    }

    #[test]
    fn test_strict_density_compares_weight_and_volume_raw() {
        let pantry = vec![PantryEntry::new("Whole Milk", 3.0, "cup")];
        let strict = OptimizerConfig {
            approximate_density: false,
            ..Default::default()
        };
        // Milk is needed in quarts; 3 cups converts to about 0.75 qt.
        let res = resolve(&required(&[("Milk", 1.0)]), &pantry, &OptimizerConfig::default());
        assert_eq!(res.shortfalls.len(), 1);
        assert!(res.warnings.is_empty());

        let pantry = vec![PantryEntry::new("Whole Milk", 3.0, "lb")];
        let res = resolve(&required(&[("Milk", 1.0)]), &pantry, &strict);
        assert_eq!(res.covered.len(), 1);
        assert!(matches!(
            res.warnings[0],
            OptimizeWarning::IncompatibleUnits { .. }
        ));
    }

    #[test]
    fn test_independent_allocation_reuses_rows() {
        let pantry = vec![PantryEntry::new("Cheddar Cheese", 1.0, "unit")];
        let need = required(&[("Cheddar Cheese", 1.0), ("Cheese", 1.0)]);
        let res = resolve(&need, &pantry, &OptimizerConfig::default());
        assert_eq!(res.covered.len(), 2);
        assert_eq!(res.covered_names(), vec!["Cheddar Cheese".to_string()]);
    }

    #[test]
    fn test_consume_allocation_draws_rows_down() {
        let pantry = vec![PantryEntry::new("Cheddar Cheese", 1.5, "unit")];
        let need = required(&[("Cheddar Cheese", 1.0), ("Cheese", 1.0)]);
        let config = OptimizerConfig {
            pantry_allocation: PantryAllocation::Consume,
            count_like_any_is_enough: false,
            ..Default::default()
        };
        let res = resolve(&need, &pantry, &config);
        // "Cheddar Cheese" sorts first and takes 1.0 of 1.5.
        assert_eq!(res.covered.len(), 1);
        assert_eq!(res.covered[0].ingredient, "Cheddar Cheese");
        assert_eq!(res.shortfalls[0].name, "Cheese");
        assert!((res.shortfalls[0].quantity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_match_needs_everything() {
        let pantry = vec![PantryEntry::new("Salmon", 2.0, "lb")];
        let res = resolve(&required(&[("Mozzarella", 1.0)]), &pantry, &OptimizerConfig::default());
        assert_eq!(res.shortfalls[0].quantity, 1.0);
        assert!(res.warnings.is_empty());
    }
}
