use serde::Serialize;
use std::fmt;

/// Urgency attached to locations, borders, corridors and alert categories.
///
/// Variants are declared from least to most urgent so the derived ordering reads
/// naturally: `Priority::Critical > Priority::High > Priority::Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All levels, most urgent first.
    pub const ALL: [Self; 3] = [Self::Critical, Self::High, Self::Medium];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
        }
    }

    /// Parses a priority label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|p| p.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
