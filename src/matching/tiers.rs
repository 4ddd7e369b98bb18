use serde::{Deserialize, Serialize};

use crate::matching::normalize::{base_name, lower_trimmed, normalize};
use crate::matching::variations::matches_variation;

/// Keywords that make two names match whenever both contain them.
pub const SHARED_KEYWORDS: [&str; 1] = ["bread"];

/// Words shorter than this never count as a prefix match.
pub const MIN_PREFIX_WORD_LEN: usize = 4;

/// Words must be longer than this to count as a word overlap.
pub const MIN_OVERLAP_WORD_LEN: usize = 2;

/// Precomputed comparison forms of one free-text name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForms {
    pub raw: String,
    pub lower: String,
    pub normalized: String,
    pub base: String,
}

impl NameForms {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lower: lower_trimmed(raw),
            normalized: normalize(raw),
            base: base_name(raw),
        }
    }

    pub fn normalized_words(&self) -> Vec<&str> {
        self.normalized.split_whitespace().collect()
    }
}

/// A predicate judging whether two names are equivalent at some tier.
pub type Matcher = fn(&NameForms, &NameForms) -> bool;

/// Match tiers between a required ingredient and a pantry row, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PantryTier {
    Exact,
    CaseInsensitive,
    Normalized,
    Partial,
    SingleWord,
    Variation,
}

impl PantryTier {
    pub const ALL: [PantryTier; 6] = [
        PantryTier::Exact,
        PantryTier::CaseInsensitive,
        PantryTier::Normalized,
        PantryTier::Partial,
        PantryTier::SingleWord,
        PantryTier::Variation,
    ];

    pub fn matcher(self) -> Matcher {
        match self {
            PantryTier::Exact => exact,
            PantryTier::CaseInsensitive => pantry_case_insensitive,
            PantryTier::Normalized => pantry_normalized,
            PantryTier::Partial => pantry_partial,
            PantryTier::SingleWord => single_word_prefix,
            PantryTier::Variation => variation,
        }
    }

    pub fn matches(self, ingredient: &NameForms, candidate: &NameForms) -> bool {
        (self.matcher())(ingredient, candidate)
    }
}

/// Match tiers between a shortfall product and a store deal, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DealTier {
    Exact,
    Normalized,
    CaseInsensitive,
    Substring,
    WordOverlap,
}

impl DealTier {
    pub const ALL: [DealTier; 5] = [
        DealTier::Exact,
        DealTier::Normalized,
        DealTier::CaseInsensitive,
        DealTier::Substring,
        DealTier::WordOverlap,
    ];

    pub fn matcher(self) -> Matcher {
        match self {
            DealTier::Exact => exact,
            DealTier::Normalized => deal_normalized,
            DealTier::CaseInsensitive => deal_case_insensitive,
            DealTier::Substring => deal_substring,
            DealTier::WordOverlap => word_overlap,
        }
    }

    pub fn matches(self, product: &NameForms, candidate: &NameForms) -> bool {
        (self.matcher())(product, candidate)
    }
}

fn exact(a: &NameForms, b: &NameForms) -> bool {
    a.raw == b.raw
}

fn contains_nonempty(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

fn pantry_case_insensitive(ingredient: &NameForms, pantry: &NameForms) -> bool {
    !ingredient.lower.is_empty()
        && (ingredient.lower == pantry.lower || ingredient.lower == pantry.normalized)
}

fn pantry_normalized(ingredient: &NameForms, pantry: &NameForms) -> bool {
    !ingredient.normalized.is_empty()
        && (ingredient.normalized == pantry.normalized || ingredient.normalized == pantry.lower)
}

fn shares_keyword(a: &NameForms, b: &NameForms) -> bool {
    SHARED_KEYWORDS
        .iter()
        .any(|k| a.lower.contains(k) && b.lower.contains(k))
}

/// Containment on the lowercase display forms, so qualifiers still block it
/// and the single-word tier below stays reachable.
fn pantry_partial(ingredient: &NameForms, pantry: &NameForms) -> bool {
    contains_nonempty(&pantry.lower, &ingredient.lower)
        || contains_nonempty(&ingredient.lower, &pantry.lower)
        || shares_keyword(ingredient, pantry)
}

fn first_word_matches(single: &str, other_first: &str) -> bool {
    single == other_first
        || (single.len() >= MIN_PREFIX_WORD_LEN && other_first.starts_with(single))
}

fn single_word_prefix(ingredient: &NameForms, pantry: &NameForms) -> bool {
    let (a, b) = (ingredient.normalized_words(), pantry.normalized_words());
    match (a.as_slice(), b.as_slice()) {
        ([only], [first, ..]) if first_word_matches(only, first) => true,
        ([first, ..], [only]) => first_word_matches(only, first),
        _ => false,
    }
}

fn variation(ingredient: &NameForms, pantry: &NameForms) -> bool {
    matches_variation(ingredient, pantry)
}

fn deal_normalized(product: &NameForms, deal: &NameForms) -> bool {
    !product.normalized.is_empty()
        && (product.normalized == deal.raw
            || product.normalized == deal.lower
            || product.normalized == deal.normalized)
}

/// `x` and `xs` name the same product.
fn plural_equivalent(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.strip_suffix('s') == Some(b) || b.strip_suffix('s') == Some(a)
}

fn deal_case_insensitive(product: &NameForms, deal: &NameForms) -> bool {
    (!product.lower.is_empty() && product.lower == deal.lower)
        || (!product.normalized.is_empty() && product.normalized == deal.normalized)
        || plural_equivalent(&product.lower, &deal.lower)
}

fn deal_substring(product: &NameForms, deal: &NameForms) -> bool {
    contains_nonempty(&deal.lower, &product.lower) || contains_nonempty(&product.lower, &deal.lower)
}

fn word_overlap(product: &NameForms, deal: &NameForms) -> bool {
    let deal_words = deal.normalized_words();
    product
        .normalized_words()
        .into_iter()
        .filter(|w| w.len() > MIN_OVERLAP_WORD_LEN)
        .any(|w| deal_words.contains(&w))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(raw: &str) -> NameForms {
        NameForms::new(raw)
    }

    fn first_pantry_tier(ingredient: &str, pantry: &str) -> Option<PantryTier> {
        let (i, p) = (forms(ingredient), forms(pantry));
        PantryTier::ALL.into_iter().find(|t| t.matches(&i, &p))
    }

    fn first_deal_tier(product: &str, deal: &str) -> Option<DealTier> {
        let (p, d) = (forms(product), forms(deal));
        DealTier::ALL.into_iter().find(|t| t.matches(&p, &d))
    }

    #[test]
    fn test_pantry_tier_order() {
        assert_eq!(first_pantry_tier("Ground Beef", "Ground Beef"), Some(PantryTier::Exact));
        assert_eq!(
            first_pantry_tier("Ground Beef", "ground beef"),
            Some(PantryTier::CaseInsensitive)
        );
        assert_eq!(
            first_pantry_tier("Milk", "Whole Milk"),
            Some(PantryTier::CaseInsensitive)
        );
        assert_eq!(
            first_pantry_tier("Frozen Peas", "peas 16oz"),
            Some(PantryTier::Normalized)
        );
        assert_eq!(
            first_pantry_tier("Cheese", "Cheddar Cheese"),
            Some(PantryTier::Partial)
        );
        assert_eq!(first_pantry_tier("Bread", "Sourdough Loaf Bread"), Some(PantryTier::Partial));
        assert_eq!(first_pantry_tier("Tomato", "Tomatoes"), Some(PantryTier::Partial));
        assert_eq!(
            first_pantry_tier("Frozen Potato", "Potatoes Russet"),
            Some(PantryTier::SingleWord)
        );
    }

    #[test]
    fn test_pantry_single_word_requires_length() {
        assert!(!PantryTier::SingleWord.matches(&forms("Frozen Pea"), &forms("Peanut Butter")));
        assert!(PantryTier::SingleWord.matches(&forms("Flour"), &forms("Flours Organic")));
        assert!(!PantryTier::SingleWord.matches(&forms("Oil"), &forms("Oils Olive")));
    }

    #[test]
    fn test_pantry_variation_groups() {
        assert_eq!(first_pantry_tier("Eggs", "Large Egg"), Some(PantryTier::Variation));
        assert_eq!(
            first_pantry_tier("Beef", "Beef Steak"),
            Some(PantryTier::Partial)
        );
        assert_eq!(first_pantry_tier("Chicken", "Salmon"), None);
    }

    #[test]
    fn test_deal_tier_order() {
        assert_eq!(first_deal_tier("Eggs", "Eggs"), Some(DealTier::Exact));
        assert_eq!(first_deal_tier("Fresh Salmon", "salmon"), Some(DealTier::Normalized));
        assert_eq!(first_deal_tier("Onion", "Onions"), Some(DealTier::CaseInsensitive));
        assert_eq!(first_deal_tier("Tomato", "Tomatoes"), Some(DealTier::Substring));
        assert_eq!(first_deal_tier("Butter", "Salted Butter"), Some(DealTier::Substring));
        assert_eq!(
            first_deal_tier("Cheddar Cheese", "Cheese Slices"),
            Some(DealTier::WordOverlap)
        );
        assert_eq!(first_deal_tier("Maple Syrup", "Olive Oil"), None);
        assert_eq!(first_deal_tier("Ox Tail", "Ox Bones"), None);
    }

    #[test]
    fn test_empty_names_never_match_loosely() {
        let empty = forms("");
        let butter = forms("Butter");
        for tier in PantryTier::ALL.into_iter().skip(1) {
            assert!(!tier.matches(&empty, &butter), "{:?}", tier);
        }
        for tier in DealTier::ALL.into_iter().skip(1) {
            assert!(!tier.matches(&empty, &butter), "{:?}", tier);
        }
    }
}
