//! Load-time consistency checks for variant catalogs.
//!
//! Catalogs are compiled in, so a failure here is a data bug in a variant crate.
//! Every problem is collected instead of stopping at the first one.

use std::collections::HashSet;
use tracing::{debug, warn};
use wmon_domain::geo::{is_valid_latitude, is_valid_longitude};
use wmon_domain::variant::VariantDescriptor;

/// A single inconsistency found in a variant's data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogIssue {
    #[error("region bounds must satisfy north > south and east > west")]
    MalformedBounds,
    #[error("region bounds lie outside valid latitude/longitude ranges")]
    BoundsOutOfRange,
    #[error("map view ({latitude}, {longitude}) is not a valid coordinate")]
    MapViewOutOfRange { latitude: f64, longitude: f64 },
    #[error("panel `{panel}` is both enabled and disabled")]
    PanelConflict { panel: &'static str },
    #[error("feed `{feed}` has a non-web url `{url}`")]
    FeedUrl { feed: &'static str, url: &'static str },
    #[error("a feed has an empty name")]
    EmptyFeedName,
    #[error("feed `{feed}` has tier 0; tiers start at 1")]
    FeedTier { feed: &'static str },
    #[error("feed `{feed}` is listed more than once")]
    DuplicateFeed { feed: &'static str },
    #[error("priority source `{name}` does not name a configured feed")]
    UnknownPrioritySource { name: &'static str },
    #[error("strategic location `{location}` lies outside the region bounds")]
    LocationOutsideBounds { location: &'static str },
    #[error("border `{border}` must have a positive length")]
    BorderLength { border: &'static str },
    #[error("border `{border}` lists no hotspots")]
    BorderHotspots { border: &'static str },
    #[error("corridor `{corridor}` lists no countries")]
    EmptyCorridor { corridor: &'static str },
    #[error("keyword tables contain an empty keyword")]
    EmptyKeyword,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Variant `{variant}` failed validation with {} issue(s): {}", .issues.len(), render(.issues))]
    Invalid { variant: &'static str, issues: Vec<CatalogIssue> },
}

fn render(issues: &[CatalogIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Checks every invariant of a variant's catalog.
///
/// # Errors
/// Returns [`CatalogError::Invalid`] listing all issues found.
pub fn validate_variant(variant: &VariantDescriptor) -> Result<(), CatalogError> {
    let issues = collect_issues(variant);
    if issues.is_empty() {
        debug!(variant = variant.name, "Catalog validated");
        return Ok(());
    }

    for issue in &issues {
        warn!(variant = variant.name, %issue, "Catalog issue");
    }
    Err(CatalogError::Invalid { variant: variant.name, issues })
}

/// Returns every issue found in `variant`, in check order.
#[must_use]
pub fn collect_issues(variant: &VariantDescriptor) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let region = &variant.region;
    let bounds = region.bounds;

    if !bounds.is_well_formed() {
        issues.push(CatalogIssue::MalformedBounds);
    }
    if ![bounds.north, bounds.south].into_iter().all(is_valid_latitude)
        || ![bounds.east, bounds.west].into_iter().all(is_valid_longitude)
    {
        issues.push(CatalogIssue::BoundsOutOfRange);
    }

    let view = variant.map.default_view;
    if !is_valid_latitude(view.latitude) || !is_valid_longitude(view.longitude) {
        issues.push(CatalogIssue::MapViewOutOfRange {
            latitude: view.latitude,
            longitude: view.longitude,
        });
    }

    issues.extend(variant.panels.overlap().map(|panel| CatalogIssue::PanelConflict { panel }));

    let mut seen = HashSet::new();
    for feed in variant.feeds.sources {
        if feed.name.trim().is_empty() {
            issues.push(CatalogIssue::EmptyFeedName);
        } else if !seen.insert(feed.name) {
            issues.push(CatalogIssue::DuplicateFeed { feed: feed.name });
        }
        if !feed.has_web_scheme() {
            issues.push(CatalogIssue::FeedUrl { feed: feed.name, url: feed.url });
        }
        if feed.tier == 0 {
            issues.push(CatalogIssue::FeedTier { feed: feed.name });
        }
    }
    for &name in variant.feeds.priority_sources {
        if !seen.contains(name) {
            issues.push(CatalogIssue::UnknownPrioritySource { name });
        }
    }

    for location in region.strategic_locations {
        if !bounds.contains(location.lat, location.lon) {
            issues.push(CatalogIssue::LocationOutsideBounds { location: location.name });
        }
    }

    for border in region.borders {
        if border.length_km == 0 {
            issues.push(CatalogIssue::BorderLength { border: border.name });
        }
        if border.hotspots.is_empty() {
            issues.push(CatalogIssue::BorderHotspots { border: border.name });
        }
    }

    for corridor in region.corridors {
        if corridor.countries.is_empty() {
            issues.push(CatalogIssue::EmptyCorridor { corridor: corridor.name });
        }
    }

    let keyword_tables = [region.keywords, region.context_keywords, region.monitored_countries];
    if keyword_tables.iter().flat_map(|t| t.iter()).any(|k| k.trim().is_empty()) {
        issues.push(CatalogIssue::EmptyKeyword);
    }

    issues
}
