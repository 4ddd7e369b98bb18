use std::sync::LazyLock;

use regex::Regex;

/// Store-ticket words that carry no product meaning.
static STORE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(club price|member price|you saved|limited time|store brand|private label|house brand|sale|discount|txn|transaction|subtotal|tax|total|savings|rebate|coupon)\b",
    )
    .expect("Invalid store noise regex")
});

static APOSTROPHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['\x{2019}]").expect("Invalid apostrophe regex"));

/// Punctuation separates words, so it becomes a space.
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("Invalid punctuation regex"));

/// Embedded package sizes: "16oz", "2 lb", "500g", "6pack", "12 count".
static SIZE_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b\d+(\.\d+)?\s*(oz|ounce|ounces|lb|lbs|pound|pounds|kg|kilogram|kilograms|g|gram|grams|ml|milliliter|milliliters|l|liter|liters|qt|gal)\b|\b\d+\s*pack\b|\b\d+\s*(count|ct)\b",
    )
    .expect("Invalid size token regex")
});

/// Quantity tokens removed when deriving a base name.
static BASE_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s*(lb|kg|g|oz|ml|l|unit|count|pack)\b").expect("Invalid quantity regex")
});

static TRAILING_DASH_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+-\s*.*$").expect("Invalid dash clause regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Descriptive qualifiers dropped from the front of a name.
pub const LEADING_QUALIFIERS: [&str; 4] = ["whole", "fresh", "canned", "frozen"];

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

fn strip_leading_qualifiers(text: &str) -> &str {
    let mut rest = text;
    loop {
        let stripped = LEADING_QUALIFIERS.iter().find_map(|q| {
            rest.strip_prefix(q)
                .and_then(|after| after.strip_prefix(' '))
        });
        match stripped {
            Some(after) => rest = after.trim_start(),
            None => return rest,
        }
    }
}

fn normalize_once(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let joined = APOSTROPHES.replace_all(&lower, "");
    let alnum = NON_ALPHANUMERIC.replace_all(&joined, " ");
    let without_noise = STORE_NOISE.replace_all(&alnum, " ");
    let without_sizes = SIZE_TOKENS.replace_all(&without_noise, " ");
    let collapsed = collapse_whitespace(&without_sizes);
    strip_leading_qualifiers(&collapsed).to_string()
}

/// Canonical comparison key for a free-text item name.
///
/// Once the input is ASCII a pass never lengthens it, so iterating to a
/// fixed point terminates and makes the result idempotent.
pub fn normalize(raw: &str) -> String {
    let mut current = normalize_once(raw);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Name with quantity, size and descriptive qualifiers stripped, used for
/// variation-table lookups.
pub fn base_name(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let without_qty = BASE_QUANTITY.replace_all(&lower, "");
    let collapsed = collapse_whitespace(&without_qty);
    let unqualified = strip_leading_qualifiers(&collapsed);
    TRAILING_DASH_CLAUSE
        .replace(unqualified, "")
        .trim()
        .to_string()
}

/// Lowercase, trimmed form used by case-insensitive comparisons.
#[inline]
pub fn lower_trimmed(raw: &str) -> String {
    raw.trim().to_lowercase()
}
