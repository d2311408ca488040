use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Host configuration: which variant to load and how to log.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Registered variant name (case-insensitive).
    pub variant: String,
    /// Feature flag overrides keyed by flag name, applied over the variant's defaults.
    pub features: BTreeMap<String, bool>,
    pub logging: LoggingConfig,
}

/// Logging sinks and verbosity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub console: bool,
    /// Default level (`trace`..`error`). `RUST_LOG` overrides it unless `filter` is set.
    pub level: String,
    /// Directory for daily-rolling log files; no file output when unset.
    pub directory: Option<PathBuf>,
    /// Write file output as JSON lines.
    pub json: bool,
    /// Extra filter directives, e.g. `wmon_kernel=debug`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            variant: "cambodia".to_owned(),
            features: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { console: true, level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}
