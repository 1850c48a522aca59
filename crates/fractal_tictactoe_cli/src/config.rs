//! Driver configuration.
//!
//! Values come from an optional TOML file and are overridden by
//! command-line flags.

use crate::cli::Cli;
use anyhow::{Context, Result};
use fractal_tictactoe::DEFAULT_DEPTH;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Log filter used when neither `RUST_LOG` nor config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    /// Number of nested levels.
    pub depth: usize,
    /// Fallback tracing filter directive.
    pub log_filter: String,
    /// Render the affected grid after every move.
    pub show_board: bool,
    /// Print status reports as JSON.
    pub json: bool,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            show_board: true,
            json: false,
        }
    }
}

impl FractalConfig {
    /// Loads configuration from a TOML file.
    #[instrument]
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(?config, "Loaded config file");
        Ok(config)
    }

    /// Resolves the effective configuration: file values first, then flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(depth) = cli.depth {
            config.depth = depth;
        }
        if let Some(filter) = &cli.log {
            config.log_filter = filter.clone();
        }
        if cli.json {
            config.json = true;
        }
        Ok(config)
    }
}
