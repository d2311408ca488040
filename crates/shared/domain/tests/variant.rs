use serde_json::Value;
use wmon_domain::alerts::{AlertPriorityTaxonomy, AlertSettings};
use wmon_domain::features::FeatureSet;
use wmon_domain::feed::{FeedDescriptor, FeedKind};
use wmon_domain::geo::{MapView, RegionBounds};
use wmon_domain::panels::PanelVisibility;
use wmon_domain::region::{CountryGroups, RegionCatalog};
use wmon_domain::registry::VariantRegistry;
use wmon_domain::variant::{FeedSettings, FilterSettings, MapSettings, VariantDescriptor};

const fn feed(name: &'static str, tier: u8) -> FeedDescriptor {
    FeedDescriptor { url: "https://example.org/rss", name, tier, kind: FeedKind::News, region: "Test" }
}

static FEEDS: [FeedDescriptor; 5] =
    [feed("c", 3), feed("a", 2), feed("b", 1), feed("pinned", 3), feed("d", 2)];

fn mentions_test(primary: &str, secondary: &str) -> bool {
    primary.contains("test") || secondary.contains("test")
}

fn in_unit_box(lat: f64, lon: f64) -> bool {
    TEST_VARIANT.region.bounds.contains(lat, lon)
}

static TEST_VARIANT: VariantDescriptor = VariantDescriptor {
    name: "test",
    display_name: "Test Monitor",
    description: "Fixture",
    map: MapSettings {
        default_view: MapView { latitude: 0.5, longitude: 0.5, zoom: 5.0, pitch: 0.0, bearing: 0.0 },
        restrict_to_bounds: true,
        default_layers: &["conflicts"],
    },
    feeds: FeedSettings { sources: &FEEDS, filter: mentions_test, priority_sources: &["pinned"] },
    panels: PanelVisibility { enabled: &["map"], disabled: &["nato-tracker"] },
    filters: FilterSettings {
        geographic: in_unit_box,
        content: mentions_test,
        show_global_events: true,
        show_regional_events: true,
        show_local_events: false,
    },
    alerts: AlertSettings {
        enable_border_alerts: true,
        enable_economic_alerts: false,
        enable_security_alerts: true,
        enable_weather_alerts: false,
        custom_keywords: &["summit"],
    },
    context_countries: &["Nowhere"],
    features: FeatureSet::BORDER_MONITOR,
    region: RegionCatalog {
        bounds: RegionBounds { north: 1.0, south: 0.0, east: 1.0, west: 0.0 },
        monitored_countries: &["Nowhere"],
        country_groups: CountryGroups { neighbors: &[], powers: &[], asean: &[], economic_partners: &[] },
        keywords: &["test"],
        context_keywords: &["trade"],
        strategic_locations: &[],
        borders: &[],
        corridors: &[],
        alert_priorities: AlertPriorityTaxonomy { critical: &[], high: &[], medium: &[] },
    },
};

static REGISTRY: VariantRegistry = VariantRegistry::new(&[&TEST_VARIANT]);

#[test]
fn prioritized_feeds_put_pinned_first_then_tier() {
    let names: Vec<_> = TEST_VARIANT.prioritized_feeds().iter().map(|f| f.name).collect();
    assert_eq!(names, ["pinned", "b", "a", "d", "c"]);
}

#[test]
fn filters_dispatch_through_function_references() {
    assert!(TEST_VARIANT.is_relevant("a test headline", ""));
    assert!(!TEST_VARIANT.is_relevant("nothing", "here"));
    assert!(TEST_VARIANT.is_in_region(1.0, 0.0));
    assert!(!TEST_VARIANT.is_in_region(2.0, 0.0));
}

#[test]
fn with_features_replaces_flags() {
    let variant = TEST_VARIANT.with_features(FeatureSet::ASEAN_NEWS | FeatureSet::MEKONG_MONITOR);
    assert!(variant.features.contains(FeatureSet::ASEAN_NEWS));
    assert!(!variant.features.contains(FeatureSet::BORDER_MONITOR));
    assert_eq!(TEST_VARIANT.features, FeatureSet::BORDER_MONITOR);
}

#[test]
fn registry_lookup_is_case_insensitive() {
    assert_eq!(REGISTRY.iter().count(), 1);
    assert_eq!(REGISTRY.get("TEST").map(|v| v.name), Some("test"));
    assert!(REGISTRY.get("other").is_none());
    assert_eq!(REGISTRY.default_variant().map(|v| v.display_name), Some("Test Monitor"));
    assert_eq!(REGISTRY.names().collect::<Vec<_>>(), ["test"]);
}

#[test]
fn serialized_descriptor_uses_host_field_names() {
    let value = serde_json::to_value(TEST_VARIANT).expect("serialize");

    assert_eq!(value["displayName"], "Test Monitor");
    assert_eq!(value["map"]["defaultView"]["zoom"], 5.0);
    assert_eq!(value["feeds"]["sources"][0]["type"], "news");
    assert_eq!(value["features"]["showBorderMonitor"], true);
    assert_eq!(value["features"]["showCryptoMarkets"], false);
    assert_eq!(value["filters"]["showLocalEvents"], false);
    assert!(value["filters"].get("content").is_none(), "function references are skipped");
    assert!(matches!(value["region"]["monitoredCountries"], Value::Array(_)));
}

#[test]
fn feature_set_deserializes_from_flag_map() {
    let set: FeatureSet =
        serde_json::from_str(r#"{"showASEANNews": true, "show_middle_east": true, "showNATOTracker": false}"#)
            .expect("flags");
    assert_eq!(set, FeatureSet::ASEAN_NEWS | FeatureSet::MIDDLE_EAST);

    let err = serde_json::from_str::<FeatureSet>(r#"{"showWeather": true}"#).unwrap_err();
    assert!(err.to_string().contains("unknown feature flag"));
}
