//! Facade crate for the world monitor's regional variants.
//! Re-exports domain/kernel primitives and owns the registry hosts select variants from.
//! Keep this crate thin: it composes variant crates, it does not define regional data.
//!
//! ## Usage
//! ```rust
//! use wmon::domain::config::MonitorConfig;
//!
//! let variant = wmon::resolve(&MonitorConfig::default())?;
//! assert_eq!(variant.name, "cambodia");
//! assert!(variant.is_relevant("Mekong dam talks", ""));
//! # Ok::<(), wmon::MonitorError>(())
//! ```

#[cfg(feature = "cambodia")]
pub use wmon_cambodia as cambodia;
pub use wmon_domain as domain;
pub use wmon_kernel as kernel;

use std::collections::BTreeMap;
use tracing::{info, warn};
use wmon_domain::config::MonitorConfig;
use wmon_domain::features::FeatureSet;
use wmon_domain::registry::VariantRegistry;
use wmon_domain::variant::VariantDescriptor;
use wmon_kernel::validate::{CatalogError, validate_variant};

/// Every variant compiled into this build (by Cargo feature). The first one is the default.
pub static VARIANTS: VariantRegistry = VariantRegistry::new(&[
    #[cfg(feature = "cambodia")]
    &wmon_cambodia::VARIANT,
]);

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Unknown variant `{name}` (available: {available})")]
    UnknownVariant { name: String, available: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Selects the configured variant, applies feature overrides and validates its catalog.
///
/// Unknown feature names are logged and ignored.
///
/// # Errors
/// * [`MonitorError::UnknownVariant`] if `config.variant` is not registered.
/// * [`MonitorError::Catalog`] if the variant's data is inconsistent.
pub fn resolve(config: &MonitorConfig) -> Result<VariantDescriptor, MonitorError> {
    let base = VARIANTS.get(&config.variant).ok_or_else(|| MonitorError::UnknownVariant {
        name: config.variant.clone(),
        available: VARIANTS.names().collect::<Vec<_>>().join(", "),
    })?;

    let (features, unknown) = apply_feature_overrides(base.features, &config.features);
    for name in unknown {
        warn!(variant = base.name, flag = name, "Ignoring unknown feature flag override");
    }

    let variant = base.with_features(features);
    validate_variant(&variant)?;

    info!(
        variant = variant.name,
        feeds = variant.feeds.sources.len(),
        features = ?variant.features,
        "Variant resolved"
    );
    Ok(variant)
}

/// Applies `overrides` (flag name → enabled) on top of `base`.
///
/// Returns the resulting set and the override names that match no flag.
pub fn apply_feature_overrides<'a>(
    base: FeatureSet,
    overrides: &'a BTreeMap<String, bool>,
) -> (FeatureSet, Vec<&'a str>) {
    let mut features = base;
    let mut unknown = Vec::new();
    for (name, &enabled) in overrides {
        match FeatureSet::lookup(name) {
            Some(flag) => features.set(flag, enabled),
            None => unknown.push(name.as_str()),
        }
    }
    (features, unknown)
}
