//! Case-insensitive substring matching used by the relevance filters.
//!
//! Matching is plain substring search over lower-cased text, so a keyword can match
//! inside a longer word (`"aid"` inside `"said"`). Filters rely on exactly that behaviour.

/// Text under test, lower-cased once.
///
/// Built from a primary and a secondary text joined by a single space, the same way
/// a headline and its description are concatenated before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haystack {
    text: String,
}

impl Haystack {
    #[must_use]
    pub fn new(primary: &str, secondary: &str) -> Self {
        let mut joined = String::with_capacity(primary.len() + secondary.len() + 1);
        joined.push_str(primary);
        joined.push(' ');
        joined.push_str(secondary);
        Self { text: joined.to_lowercase() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if `needle` occurs anywhere in the text, ignoring case.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.text.contains(&needle.to_lowercase())
    }

    /// Returns the first needle, in slice order, that occurs in the text.
    #[must_use]
    pub fn first_mention<'a>(&self, needles: &[&'a str]) -> Option<&'a str> {
        needles.iter().copied().find(|needle| self.mentions(needle))
    }
}
