//! Filter signatures handed to the host pipelines.

use serde::Serialize;

/// Content filter: `(primary text, secondary text) -> relevant?`.
///
/// Hosts with a single text pass `""` as the secondary argument.
pub type ContentFilter = fn(&str, &str) -> bool;

/// Geographic filter: `(latitude, longitude) -> inside the region?`.
pub type GeoFilter = fn(f64, f64) -> bool;

/// Why a text was (or was not) judged relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "match", rename_all = "camelCase")]
pub enum Relevance {
    /// A direct keyword occurs in the text.
    Direct { keyword: &'static str },
    /// A monitored country and a contextual keyword both occur in the text.
    Contextual { country: &'static str, context: &'static str },
    NotRelevant,
}

impl Relevance {
    #[must_use]
    pub const fn is_relevant(&self) -> bool {
        !matches!(self, Self::NotRelevant)
    }
}
