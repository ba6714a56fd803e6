//! CLI command implementations for the `netwalk` binary.

pub mod commands;

use clap::ValueEnum;
use log::LevelFilter;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}

/// Install the stderr logger.
///
/// `verbose` forces debug level; otherwise `RUST_LOG` decides, defaulting to
/// warnings. Returns false if a logger was already installed.
pub fn init_logging(verbose: bool) -> bool {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.try_init().is_ok()
}
