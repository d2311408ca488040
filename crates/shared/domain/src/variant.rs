use crate::alerts::AlertSettings;
use crate::features::FeatureSet;
use crate::feed::FeedDescriptor;
use crate::geo::MapView;
use crate::panels::PanelVisibility;
use crate::region::RegionCatalog;
use crate::relevance::{ContentFilter, GeoFilter};
use serde::Serialize;

/// One region-specific configuration profile, as loaded by the host.
///
/// Function references are not serialized; a serialized descriptor carries only data.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub map: MapSettings,
    pub feeds: FeedSettings,
    pub panels: PanelVisibility,
    pub filters: FilterSettings,
    pub alerts: AlertSettings,
    pub context_countries: &'static [&'static str],
    pub features: FeatureSet,
    pub region: RegionCatalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub default_view: MapView,
    /// When `false` the user may pan outside the region to see its context.
    pub restrict_to_bounds: bool,
    pub default_layers: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSettings {
    pub sources: &'static [FeedDescriptor],
    #[serde(skip)]
    pub filter: ContentFilter,
    /// Feed names shown ahead of everything else, in this order.
    pub priority_sources: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSettings {
    #[serde(skip)]
    pub geographic: GeoFilter,
    #[serde(skip)]
    pub content: ContentFilter,
    pub show_global_events: bool,
    pub show_regional_events: bool,
    pub show_local_events: bool,
}

impl VariantDescriptor {
    /// Runs the variant's content filter.
    #[must_use]
    pub fn is_relevant(&self, primary: &str, secondary: &str) -> bool {
        (self.filters.content)(primary, secondary)
    }

    /// Runs the variant's geographic filter.
    #[must_use]
    pub fn is_in_region(&self, latitude: f64, longitude: f64) -> bool {
        (self.filters.geographic)(latitude, longitude)
    }

    /// Feeds in display order: priority sources first, in their listed order, then the
    /// remaining feeds by ascending tier. Feeds sharing a tier keep their catalog order.
    #[must_use]
    pub fn prioritized_feeds(&self) -> Vec<&'static FeedDescriptor> {
        let sources = self.feeds.sources;
        let preferred = self.feeds.priority_sources;

        let mut ordered: Vec<&'static FeedDescriptor> = Vec::with_capacity(sources.len());
        for name in preferred {
            if let Some(feed) = sources.iter().find(|f| f.name == *name)
                && !ordered.iter().any(|f| f.name == feed.name)
            {
                ordered.push(feed);
            }
        }

        let mut rest: Vec<_> = sources.iter().filter(|f| !preferred.contains(&f.name)).collect();
        rest.sort_by_key(|f| f.tier);
        ordered.extend(rest);
        ordered
    }

    /// Returns a copy of this descriptor with `features` replacing its flags.
    #[must_use]
    pub const fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }
}
