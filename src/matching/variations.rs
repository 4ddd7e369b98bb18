use crate::matching::tiers::NameForms;

/// Hand-maintained groups of names that denote the same pantry staple.
pub const VARIATION_GROUPS: [(&str, &[&str]); 8] = [
    (
        "milk",
        &["whole milk", "2% milk", "skim milk", "almond milk", "soy milk"],
    ),
    (
        "rice",
        &["white rice", "brown rice", "jasmine rice", "basmati rice", "long grain rice"],
    ),
    ("eggs", &["egg", "large eggs", "chicken eggs", "eggs"]),
    (
        "bread",
        &[
            "white bread",
            "wheat bread",
            "whole wheat bread",
            "bread",
            "sourdough bread",
            "rye bread",
            "baguette",
            "dinner rolls",
            "loaf",
        ],
    ),
    (
        "chicken",
        &["chicken breast", "chicken thighs", "whole chicken", "chicken"],
    ),
    ("beef", &["ground beef", "beef steak", "beef roast", "beef"]),
    ("soy sauce", &["soy sauce", "dark soy sauce", "light soy sauce"]),
    (
        "flour",
        &[
            "flour",
            "all-purpose flour",
            "whole wheat flour",
            "white flour",
            "bread flour",
            "cake flour",
            "tempura flour",
            "all purpose flour",
        ],
    ),
];

fn mentions(forms: &NameForms, needle: &str) -> bool {
    forms.lower.contains(needle) || forms.base.contains(needle)
}

fn in_group(a: &NameForms, b: &NameForms, base: &str, variants: &[&str]) -> bool {
    mentions(a, base) && variants.iter().any(|v| mentions(b, v))
}

/// Whether two names are variations of one another: equal base names, one
/// containing the other's base name, or membership in a common group.
pub fn matches_variation(a: &NameForms, b: &NameForms) -> bool {
    if a.base.is_empty() || b.base.is_empty() {
        return false;
    }
    if a.base == b.base || a.lower.contains(&b.base) || b.lower.contains(&a.base) {
        return true;
    }
    VARIATION_GROUPS
        .iter()
        .any(|(base, variants)| in_group(a, b, base, variants) || in_group(b, a, base, variants))
}
