use crate::error::format_context;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment overrides (`WMON__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "WMON";
/// Base name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "monitor";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Attaches a context message to config failures.
pub trait ConfigErrorExt<T> {
    /// # Errors
    /// Returns the original failure wrapped in [`ConfigError::Config`].
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Loads host configuration from a file layered under environment overrides.
///
/// 1. **Base file**: an explicit `path` must exist. Without one, `monitor.{toml,json,yaml,..}`
///    in the working directory is used when present; otherwise every field keeps its default.
/// 2. **Environment**: variables prefixed with `WMON__` override the file. Nested keys use
///    double underscores (`WMON__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError`] if an explicit file is missing, a source cannot be parsed,
/// or the merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use wmon_kernel::config::load_config;
/// use wmon_kernel::domain::config::MonitorConfig;
///
/// let cfg: MonitorConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(!cfg.variant.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, environment())
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process environment.
///
/// Keys keep their prefix (`WMON__VARIANT`).
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    vars: config::Map<String, String>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, environment().source(Some(vars)))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    debug!("Config loaded");
    Ok(config)
}
