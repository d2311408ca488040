//! # Cambodia variant
//!
//! Regional slice of the world monitor focused on Cambodia and its neighbours.
//!
//! * [`catalog`]: compiled-in reference tables (map view, bounds, keywords, feeds,
//!   strategic locations, borders, corridors, alert taxonomy, panels).
//! * [`filters`]: the content and geographic relevance filters.
//! * [`VARIANT`]: everything above composed into the descriptor the host loads.
//!
//! ```rust
//! use wmon_cambodia::{VARIANT, is_cambodia_relevant, is_in_cambodia_region};
//!
//! assert!(is_cambodia_relevant("ASEAN ministers gather", ""));
//! assert!(is_in_cambodia_region(11.5564, 104.9282));
//! assert!(VARIANT.is_relevant("Vietnam tariff talks", ""));
//! ```

pub mod catalog;
pub mod filters;
mod variant;

pub use crate::filters::{
    is_cambodia_relevant, is_cambodia_relevant_headline, is_in_cambodia_region, relevance,
};
pub use crate::variant::{DEFAULT_FEATURES, NAME, VARIANT};
