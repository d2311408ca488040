use wmon_cambodia::catalog::{ALERT_PRIORITIES, BORDERS, FOCUSED_FEEDS, PANELS, REGION};
use wmon_cambodia::{DEFAULT_FEATURES, VARIANT};
use wmon_domain::feed::FeedDescriptor;
use wmon_domain::features::FeatureSet;
use wmon_domain::panels::PanelVisibility;
use wmon_domain::priority::Priority;
use wmon_domain::variant::FeedSettings;
use wmon_kernel::validate::{CatalogError, CatalogIssue, collect_issues, validate_variant};

#[test]
fn panels_are_disjoint() {
    assert!(PANELS.is_disjoint());
    for panel in PANELS.enabled {
        assert!(!PANELS.disabled.contains(panel), "{panel} is both enabled and disabled");
    }
    assert_eq!(PANELS.visibility("map"), Some(true));
    assert_eq!(PANELS.visibility("nato-tracker"), Some(false));
}

#[test]
fn shipped_variant_validates() {
    validate_variant(&VARIANT).expect("Cambodia catalog should be consistent");
}

#[test]
fn strategic_locations_lie_inside_the_region() {
    for location in REGION.strategic_locations {
        assert!(VARIANT.is_in_region(location.lat, location.lon), "{} outside", location.name);
    }
    let critical: Vec<_> = REGION.locations_with_priority(Priority::Critical).map(|l| l.name).collect();
    assert_eq!(critical, ["Phnom Penh", "Sihanoukville Port", "Ream Naval Base"]);
}

#[test]
fn borders_and_corridors() {
    let total_km: u32 = BORDERS.iter().map(|b| b.length_km).sum();
    assert_eq!(total_km, 817 + 1158 + 555);

    let thai = REGION.border_with("thailand").expect("Thai border");
    assert_eq!(thai.priority, Priority::Critical);
    assert_eq!(thai.hotspots.first(), Some(&"Preah Vihear Temple"));
    assert!(REGION.border_with("Myanmar").is_none());

    assert_eq!(REGION.corridors[0].countries, ["Thailand", "Cambodia", "Vietnam"]);
}

#[test]
fn alert_taxonomy_classifies_labels() {
    assert_eq!(ALERT_PRIORITIES.classify("Border Conflict"), Some(Priority::Critical));
    assert_eq!(ALERT_PRIORITIES.classify("tourism impact"), Some(Priority::High));
    assert_eq!(ALERT_PRIORITIES.classify("cultural event"), Some(Priority::Medium));
    assert_eq!(ALERT_PRIORITIES.classify("sports result"), None);
    assert_eq!(ALERT_PRIORITIES.iter().count(), 14);
}

#[test]
fn prioritized_feeds_start_with_cambodian_sources() {
    let names: Vec<_> = VARIANT.prioritized_feeds().iter().map(|f| f.name).collect();
    assert_eq!(names.len(), FOCUSED_FEEDS.len());
    assert_eq!(&names[..3], ["Phnom Penh Post", "Khmer Times", "VOA Cambodia"]);
    // Then tier 1 before tier 2, catalog order within a tier.
    assert_eq!(names[3], "ASEAN Official");
    assert_eq!(names[4], "The Diplomat (Asia)");
    assert_eq!(names.last(), Some(&"The ASEAN Post"));
}

#[test]
fn variant_descriptor_matches_profile() {
    assert_eq!(VARIANT.name, "cambodia");
    assert_eq!(VARIANT.display_name, "Cambodia Monitor");
    assert!(!VARIANT.map.restrict_to_bounds);
    assert_eq!(VARIANT.map.default_layers.len(), 7);
    assert!(VARIANT.filters.show_global_events);
    assert!(VARIANT.alerts.enable_weather_alerts);
    assert_eq!(VARIANT.features, DEFAULT_FEATURES);
    assert!(!VARIANT.features.contains(FeatureSet::CRYPTO_MARKETS));
    assert!(VARIANT.features.contains(FeatureSet::MEKONG_MONITOR));
    assert!((VARIANT.map.default_view.zoom - 7.0).abs() < f64::EPSILON);
}

#[test]
fn variant_serializes_for_the_host() {
    let value = serde_json::to_value(VARIANT).expect("serialize variant");
    assert_eq!(value["name"], "cambodia");
    assert_eq!(value["feeds"]["prioritySources"][2], "VOA Cambodia");
    assert_eq!(value["features"]["showNATOTracker"], false);
    assert_eq!(value["features"]["showASEANNews"], true);
    assert_eq!(value["region"]["strategicLocations"][5]["type"], "military");
    assert_eq!(value["region"]["alertPriorities"]["critical"][0], "border conflict");
    assert_eq!(value["panels"]["disabled"][1], "nato-tracker");
}

static BROKEN_FEEDS: [FeedDescriptor; 2] = [
    FeedDescriptor { url: "ftp://example.org/feed", name: "Broken", tier: 0, ..FOCUSED_FEEDS[0] },
    FeedDescriptor { name: "Broken", ..FOCUSED_FEEDS[1] },
];

#[test]
fn corrupted_copy_reports_every_issue() {
    let mut broken = VARIANT;
    broken.panels = PanelVisibility { enabled: &["map", "middle-east"], disabled: &["middle-east"] };
    broken.feeds = FeedSettings { sources: &BROKEN_FEEDS, ..VARIANT.feeds };
    broken.region.bounds.north = broken.region.bounds.south;

    let issues = collect_issues(&broken);
    assert!(issues.contains(&CatalogIssue::MalformedBounds));
    assert!(issues.contains(&CatalogIssue::PanelConflict { panel: "middle-east" }));
    assert!(issues.contains(&CatalogIssue::FeedUrl { feed: "Broken", url: "ftp://example.org/feed" }));
    assert!(issues.contains(&CatalogIssue::FeedTier { feed: "Broken" }));
    assert!(issues.contains(&CatalogIssue::DuplicateFeed { feed: "Broken" }));
    assert!(issues.contains(&CatalogIssue::UnknownPrioritySource { name: "Phnom Penh Post" }));
    assert!(
        issues.iter().any(|i| matches!(i, CatalogIssue::LocationOutsideBounds { .. })),
        "collapsed bounds exclude every location"
    );

    let CatalogError::Invalid { variant, issues: reported } =
        validate_variant(&broken).expect_err("broken copy must fail");
    assert_eq!(variant, "cambodia");
    assert_eq!(reported, issues);
}
