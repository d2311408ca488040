//! Kernel utilities shared across regional variants.
//! Keep this crate lightweight: config loading, the case-folded matcher the relevance
//! filters are written against, and load-time validation of variant catalogs.
//!
//! ## Matching
//! ```rust
//! use wmon_kernel::matching::Haystack;
//!
//! let text = Haystack::new("ASEAN summit opens", "");
//! assert!(text.mentions("asean"));
//! assert_eq!(text.first_mention(&["Mekong", "Summit"]), Some("Summit"));
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use wmon_kernel::config::load_config;
//! use wmon_kernel::domain::config::MonitorConfig;
//!
//! let cfg: MonitorConfig = load_config(Some("monitor.toml"))?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod error;
pub mod matching;
pub mod validate;

pub use wmon_domain as domain;
