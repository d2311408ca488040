//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for monitor hosts.
//!
//! * Console output is compact and goes to **stderr**, so command output on stdout stays clean.
//! * File output (optional) rolls daily through a non-blocking writer and can be JSON.
//! * Verbosity comes from [`LoggerBuilder::level`], refined by [`LoggerBuilder::env_filter`];
//!   `RUST_LOG` applies when no explicit filter is given.
//!
//! ## Example
//!
//! ```rust
//! use wmon_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("my-host").level(LevelFilter::DEBUG).init().unwrap();
//! tracing::info!("ready");
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use wmon_kernel::domain::config::LoggingConfig;

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Parses a level name such as `"info"` or `"DEBUG"`.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|e| LoggerError::invalid(format!("Unknown log level '{level}': {e}")))
}

/// Collects logger settings; [`LoggerBuilder::init`] installs the subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    directory: Option<PathBuf>,
    json: bool,
    env_filter: Option<String>,
    max_files: usize,
}

impl LoggerBuilder {
    /// Starts a builder from host configuration.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] if `settings.level` is not a level name.
    pub fn from_config(name: impl Into<String>, settings: &LoggingConfig) -> Result<Self, LoggerError> {
        let mut builder = Logger::builder(name)
            .console(settings.console)
            .level(parse_level(&settings.level)?)
            .json(settings.json);
        if let Some(directory) = &settings.directory {
            builder = builder.directory(directory);
        }
        if let Some(filter) = &settings.filter {
            builder = builder.env_filter(filter);
        }
        Ok(builder)
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Writes daily-rolling `<name>.<date>.log` files into `directory`, creating it if needed.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Formats file output as JSON lines. Console output is unaffected.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Adds filter directives (e.g. `wmon_kernel=debug`) on top of the default level.
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Number of rolled files kept on disk.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown; dropping it flushes file output.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`]: empty name, zero `max_files`, a bad filter,
    ///   or no output enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`]: the log directory is unusable.
    /// * [`LoggerError::Subscriber`]: a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_filter()?;

        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_writer(std::io::stderr).boxed());
        }

        let guard = match &self.directory {
            Some(directory) => {
                fs::create_dir_all(directory).map_err(|source| LoggerError::Io {
                    source,
                    context: Some(format!("creating {}", directory.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(directory)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("No output enabled; enable console or a log directory"));
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if self.max_files == 0 {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            Some(directives) => builder.parse(directives).map_err(|e| {
                LoggerError::invalid(format!("Invalid env filter '{directives}': {e}"))
            }),
            None => Ok(builder.from_env_lossy()),
        }
    }
}

/// Handle to the installed subscriber. Holds the file writer's worker guard, if any.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes rolled log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            directory: None,
            json: false,
            env_filter: None,
            max_files: DEFAULT_MAX_FILES,
        }
    }

    /// `true` when file output is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logger shutting down, flushing file output");
        }
    }
}
