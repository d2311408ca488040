use crate::priority::Priority;
use serde::Serialize;

/// Maps each priority level to the alert categories raised at that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertPriorityTaxonomy {
    pub critical: &'static [&'static str],
    pub high: &'static [&'static str],
    pub medium: &'static [&'static str],
}

impl AlertPriorityTaxonomy {
    #[must_use]
    pub const fn categories(&self, priority: Priority) -> &'static [&'static str] {
        match priority {
            Priority::Critical => self.critical,
            Priority::High => self.high,
            Priority::Medium => self.medium,
        }
    }

    /// Returns the priority of an alert category label.
    ///
    /// Labels compare case-insensitively after trimming. A label listed at several
    /// levels resolves to the most urgent one.
    #[must_use]
    pub fn classify(&self, label: &str) -> Option<Priority> {
        let label = label.trim();
        Priority::ALL
            .into_iter()
            .find(|&p| self.categories(p).iter().any(|c| c.eq_ignore_ascii_case(label)))
    }

    /// Iterates `(priority, category)` pairs, most urgent first.
    pub fn iter(&self) -> impl Iterator<Item = (Priority, &'static str)> + '_ {
        Priority::ALL
            .into_iter()
            .flat_map(|p| self.categories(p).iter().map(move |&c| (p, c)))
    }
}

/// Which alert streams a variant raises, plus extra trigger words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettings {
    pub enable_border_alerts: bool,
    pub enable_economic_alerts: bool,
    pub enable_security_alerts: bool,
    pub enable_weather_alerts: bool,
    pub custom_keywords: &'static [&'static str],
}
