//! Command-line surface of the `wmon` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "wmon")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect world monitor variants and run their relevance filters")]
pub(crate) struct Cli {
    /// Configuration file (defaults to an optional `monitor.*` in the working directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Variant to load, overriding the configured one
    #[arg(short, long, global = true, value_name = "NAME")]
    pub(crate) variant: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List the variants compiled into this build
    Variants {},
    /// Print the resolved variant descriptor as JSON
    Show {},
    /// List feeds in the order the host should poll them
    Feeds {},
    /// Check whether a text pair is relevant to the variant
    Relevant {
        /// Primary text, usually a headline
        primary: String,
        /// Secondary text, usually a summary
        #[arg(default_value = "")]
        secondary: String,
    },
    /// Check whether a coordinate falls inside the variant's region
    Locate {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Read `primary<TAB>secondary` lines from stdin and echo the relevant ones
    Filter {},
    /// Validate the variant's catalog and print a summary
    Validate {},
}
