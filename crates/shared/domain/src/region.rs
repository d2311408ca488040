use crate::alerts::AlertPriorityTaxonomy;
use crate::geo::{RegionBounds, StrategicLocation};
use crate::priority::Priority;
use serde::Serialize;

/// A land border watched for incidents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderDescriptor {
    pub name: &'static str,
    pub neighbor: &'static str,
    pub length_km: u32,
    pub priority: Priority,
    pub hotspots: &'static [&'static str],
}

/// A cross-border trade route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EconomicCorridor {
    pub name: &'static str,
    pub countries: &'static [&'static str],
    pub description: &'static str,
    pub priority: Priority,
}

/// Countries grouped by how they bear on the monitored region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryGroups {
    pub neighbors: &'static [&'static str],
    pub powers: &'static [&'static str],
    pub asean: &'static [&'static str],
    pub economic_partners: &'static [&'static str],
}

/// Reference tables describing one monitored region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCatalog {
    pub bounds: RegionBounds,
    pub monitored_countries: &'static [&'static str],
    pub country_groups: CountryGroups,
    /// Direct mentions: any one of these makes a text relevant.
    pub keywords: &'static [&'static str],
    /// Topical terms that make a monitored-country mention relevant.
    pub context_keywords: &'static [&'static str],
    pub strategic_locations: &'static [StrategicLocation],
    pub borders: &'static [BorderDescriptor],
    pub corridors: &'static [EconomicCorridor],
    pub alert_priorities: AlertPriorityTaxonomy,
}

impl RegionCatalog {
    pub fn locations_with_priority(
        &self,
        priority: Priority,
    ) -> impl Iterator<Item = &'static StrategicLocation> {
        self.strategic_locations.iter().filter(move |l| l.priority == priority)
    }

    /// Finds the border shared with `neighbor`, ignoring ASCII case.
    #[must_use]
    pub fn border_with(&self, neighbor: &str) -> Option<&'static BorderDescriptor> {
        self.borders.iter().find(|b| b.neighbor.eq_ignore_ascii_case(neighbor))
    }
}
