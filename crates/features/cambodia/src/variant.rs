use crate::catalog::{FOCUSED_FEEDS, MAP_VIEW, PANELS, REGION};
use crate::filters::{is_cambodia_relevant, is_in_cambodia_region};
use wmon_domain::alerts::AlertSettings;
use wmon_domain::features::FeatureSet;
use wmon_domain::variant::{FeedSettings, FilterSettings, MapSettings, VariantDescriptor};

/// Registry name of this variant.
pub const NAME: &str = "cambodia";

pub const DEFAULT_FEATURES: FeatureSet = FeatureSet::BORDER_MONITOR
    .union(FeatureSet::MEKONG_MONITOR)
    .union(FeatureSet::ASEAN_NEWS)
    .union(FeatureSet::ECONOMIC_CORRIDORS);

/// The Cambodia monitor profile.
pub static VARIANT: VariantDescriptor = VariantDescriptor {
    name: NAME,
    display_name: "Cambodia Monitor",
    description: "Real-time monitoring for Cambodia and regional developments",
    map: MapSettings {
        default_view: MAP_VIEW,
        // Panning stays free so regional context remains visible.
        restrict_to_bounds: false,
        default_layers: &[
            "conflicts",
            "protests",
            "bases",
            "infrastructure",
            "cables",
            "earthquakes",
            "fires",
        ],
    },
    feeds: FeedSettings {
        sources: FOCUSED_FEEDS,
        filter: is_cambodia_relevant,
        priority_sources: &["Phnom Penh Post", "Khmer Times", "VOA Cambodia"],
    },
    panels: PANELS,
    filters: FilterSettings {
        geographic: is_in_cambodia_region,
        content: is_cambodia_relevant,
        show_global_events: true,
        show_regional_events: true,
        show_local_events: true,
    },
    alerts: AlertSettings {
        enable_border_alerts: true,
        enable_economic_alerts: true,
        enable_security_alerts: true,
        enable_weather_alerts: true,
        custom_keywords: &[
            "Hun Manet",
            "Ream base",
            "Sihanoukville",
            "Preah Vihear",
            "Mekong",
            "ASEAN summit",
        ],
    },
    context_countries: &["Thailand", "Vietnam", "Laos", "China", "Singapore"],
    features: DEFAULT_FEATURES,
    region: REGION,
};
