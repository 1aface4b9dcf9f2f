//! Structured-data extraction: genre, district, budget, requirements.

use once_cell::sync::Lazy;
use regex::Regex;

use super::vocab::{all_matches, first_match, FOOD_GENRES, LOCATIONS, REQUIREMENTS};
use meshi_core::StructuredData;

/// Currency unit appended to budgets.
pub const CURRENCY_UNIT: &str = "円";

static BUDGET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)円").unwrap());

/// Extract a [`StructuredData`] record from free text. Never fails; fields
/// with no evidence stay unset.
pub fn extract(content: &str) -> StructuredData {
    StructuredData {
        food_genre: first_match(content, FOOD_GENRES).map(str::to_string),
        specific_menu: None,
        location: first_match(content, LOCATIONS).map(str::to_string),
        budget: extract_budget(content),
        other_requirements: all_matches(content, REQUIREMENTS)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// First `<digits>円` in the text.
pub fn extract_budget(content: &str) -> Option<String> {
    BUDGET_RE
        .captures(content)
        .and_then(|cap| cap.get(1))
        .map(|digits| format!("{}{}", digits.as_str(), CURRENCY_UNIT))
}
