use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selected meals with requested servings. Missing servings are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealRequest {
    servings: BTreeMap<String, Option<i64>>,
}

impl MealRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, i64)]) -> Self {
        let mut request = Self::new();
        for (meal_id, servings) in pairs {
            request.insert(meal_id, Some(*servings));
        }
        request
    }

    pub fn insert(&mut self, meal_id: &str, servings: Option<i64>) {
        self.servings.insert(meal_id.to_string(), servings);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<i64>)> {
        self.servings.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.servings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servings.is_empty()
    }
}

/// Parse a `NAME=SERVINGS` pair; a bare `NAME` means default servings.
pub fn parse_meal_arg(arg: &str) -> Option<(String, Option<i64>)> {
    let (name, servings) = match arg.rsplit_once('=') {
        Some((name, count)) => (name, Some(count.trim().parse().ok()?)),
        None => (arg, None),
    };
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), servings))
}
