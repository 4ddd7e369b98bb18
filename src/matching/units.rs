use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Weight aliases to grams.
pub static WEIGHT_TO_GRAMS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for alias in ["g", "gram", "grams"] {
        m.insert(alias, 1.0);
    }
    for alias in ["kg", "kilogram", "kilograms"] {
        m.insert(alias, 1000.0);
    }
    for alias in ["oz", "ounce", "ounces"] {
        m.insert(alias, 28.35);
    }
    for alias in ["lb", "lbs", "pound", "pounds"] {
        m.insert(alias, 453.6);
    }
    m
});

/// Volume aliases to milliliters.
pub static VOLUME_TO_ML: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    let table: [(&[&'static str], f64); 10] = [
        (&["ml", "milliliter", "milliliters"], 1.0),
        (&["l", "liter", "liters"], 1000.0),
        (&["fl oz", "fluid ounce", "fluid ounces"], 29.57),
        (&["cup", "cups"], 236.59),
        (&["pt", "pint", "pints"], 473.18),
        (&["qt", "quart", "quarts"], 946.35),
        (&["gal", "gallon", "gallons"], 3785.41),
        (&["tbsp", "tablespoon", "tablespoons"], 14.79),
        (&["tsp", "teaspoon", "teaspoons"], 4.93),
        (&["cl", "centiliter", "centiliters"], 10.0),
    ];
    for (aliases, factor) in table {
        for alias in aliases {
            m.insert(*alias, factor);
        }
    }
    m
});

/// Units denoting discrete items, interchangeable without numeric conversion.
pub const COUNT_LIKE_UNITS: [&str; 18] = [
    "unit", "units", "count", "counts", "piece", "pieces", "item", "items", "bun", "buns",
    "roll", "rolls", "loaf", "loaves", "slice", "slices", "each", "ea",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitCategory {
    Weight,
    Volume,
    Count,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub quantity: f64,

    /// True when the density heuristic or the count-like identity was used.
    pub approximate: bool,
}

/// Canonical spelling of a unit alias: lowercase, single-spaced, no trailing period.
pub fn canonical_unit(unit: &str) -> String {
    unit.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .trim_end_matches('.')
        .to_string()
}

pub fn is_count_like(unit: &str) -> bool {
    COUNT_LIKE_UNITS.contains(&canonical_unit(unit).as_str())
}

pub fn category(unit: &str) -> Option<UnitCategory> {
    let unit = canonical_unit(unit);
    if WEIGHT_TO_GRAMS.contains_key(unit.as_str()) {
        Some(UnitCategory::Weight)
    } else if VOLUME_TO_ML.contains_key(unit.as_str()) {
        Some(UnitCategory::Volume)
    } else if COUNT_LIKE_UNITS.contains(&unit.as_str()) {
        Some(UnitCategory::Count)
    } else {
        None
    }
}

/// Identical units, same-category units, or two count-like units.
pub fn are_compatible(a: &str, b: &str) -> bool {
    let (a, b) = (canonical_unit(a), canonical_unit(b));
    if a == b {
        return true;
    }
    match (category(&a), category(&b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn factor(unit: &str, category: UnitCategory) -> Option<f64> {
    match category {
        UnitCategory::Weight => WEIGHT_TO_GRAMS.get(unit).copied(),
        UnitCategory::Volume => VOLUME_TO_ML.get(unit).copied(),
        UnitCategory::Count => None,
    }
}

/// Weight/volume conversion assuming a density of 1 g/ml.
///
/// This is a heuristic that holds for water-like goods only. It exists so a
/// pantry "500 g" of yogurt can be weighed against a recipe's "2 cups"; a
/// stricter caller should disable it through [`UnitConverter::strict`].
pub fn approximate_density_conversion(quantity: f64, from: &str, to: &str) -> Option<f64> {
    let (from, to) = (canonical_unit(from), canonical_unit(to));
    let base = match (category(&from)?, category(&to)?) {
        (UnitCategory::Weight, UnitCategory::Volume) | (UnitCategory::Volume, UnitCategory::Weight) => {
            quantity * factor(&from, category(&from)?)?
        }
        _ => return None,
    };
    Some(base / factor(&to, category(&to)?)?)
}

/// Converts quantities through the fixed weight and volume tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitConverter {
    approximate_density: bool,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self {
            approximate_density: true,
        }
    }
}

impl UnitConverter {
    pub fn new(approximate_density: bool) -> Self {
        Self {
            approximate_density,
        }
    }

    /// Same-category conversions only.
    pub fn strict() -> Self {
        Self::new(false)
    }

    pub fn convert(&self, quantity: f64, from: &str, to: &str) -> Option<Conversion> {
        let (from, to) = (canonical_unit(from), canonical_unit(to));
        if from == to {
            return Some(Conversion {
                quantity,
                approximate: false,
            });
        }

        match (category(&from), category(&to)) {
            (Some(UnitCategory::Count), Some(UnitCategory::Count)) => Some(Conversion {
                quantity,
                approximate: true,
            }),
            (Some(a), Some(b)) if a == b => {
                let grams_or_ml = quantity * factor(&from, a)?;
                Some(Conversion {
                    quantity: grams_or_ml / factor(&to, b)?,
                    approximate: false,
                })
            }
            (Some(_), Some(_)) if self.approximate_density => {
                approximate_density_conversion(quantity, &from, &to).map(|quantity| Conversion {
                    quantity,
                    approximate: true,
                })
            }
            _ => None,
        }
    }
}

/// Convert with the default converter; `None` means incompatible units.
pub fn convert(quantity: f64, from: &str, to: &str) -> Option<f64> {
    UnitConverter::default()
        .convert(quantity, from, to)
        .map(|c| c.quantity)
}

/// Unit a required ingredient is measured and listed in.
pub fn infer_unit(ingredient: &str) -> &'static str {
    let name = ingredient.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| name.contains(n));

    if has(&["chicken", "beef", "salmon", "bacon"]) {
        "lb"
    } else if has(&["egg"]) {
        "count"
    } else if has(&["milk", "broth"]) {
        "qt"
    } else if has(&["rice", "pasta", "spaghetti", "penne"]) {
        "lb"
    } else if has(&["tortilla", "crouton"]) {
        "count"
    } else {
        "unit"
    }
}
