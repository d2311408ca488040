//! Relevance filters for the Cambodia monitor.
//!
//! A text is relevant when it names Cambodia directly (any entry of [`KEYWORDS`]), or when it
//! names a monitored country *and* a contextual topic such as trade or security. A country
//! mention alone is not enough. Matching is case-insensitive substring search.

use crate::catalog::{CONTEXT_KEYWORDS, KEYWORDS, MONITORED_COUNTRIES, REGION_BOUNDS};
use wmon_domain::relevance::Relevance;
use wmon_kernel::matching::Haystack;

/// Explains how `primary` + `secondary` were classified.
#[must_use]
pub fn relevance(primary: &str, secondary: &str) -> Relevance {
    let text = Haystack::new(primary, secondary);

    if let Some(keyword) = text.first_mention(KEYWORDS) {
        return Relevance::Direct { keyword };
    }

    match (text.first_mention(MONITORED_COUNTRIES), text.first_mention(CONTEXT_KEYWORDS)) {
        (Some(country), Some(context)) => Relevance::Contextual { country, context },
        _ => Relevance::NotRelevant,
    }
}

/// Content filter for the feed pipeline: is this headline/description about Cambodia?
#[must_use]
pub fn is_cambodia_relevant(primary: &str, secondary: &str) -> bool {
    relevance(primary, secondary).is_relevant()
}

/// [`is_cambodia_relevant`] for a text without a secondary part.
#[must_use]
pub fn is_cambodia_relevant_headline(primary: &str) -> bool {
    is_cambodia_relevant(primary, "")
}

/// Geographic filter for the event pipeline: inclusive on every edge of [`REGION_BOUNDS`].
#[must_use]
pub fn is_in_cambodia_region(latitude: f64, longitude: f64) -> bool {
    REGION_BOUNDS.contains(latitude, longitude)
}
