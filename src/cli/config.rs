//! TOML configuration file support.
//!
//! Settings that rarely change between runs can live in a config file instead
//! of on the command line:
//!
//! ```toml
//! # eureject.toml
//! [rejection]
//! num_retain = 500
//! num_subsample = 20000
//! include_distance = true
//! ```
//!
//! Flags given on the command line win over values from the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for eureject.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rejection settings.
    #[serde(default)]
    pub rejection: RejectionConfig,
}

/// Settings for a rejection run.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RejectionConfig {
    /// Number of simulated rows to retain (0 reports standardization only).
    pub num_retain: Option<usize>,

    /// Rows used to estimate means and standard deviations.
    pub num_subsample: Option<usize>,

    /// Prefix retained rows with their distance.
    pub include_distance: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML configuration")?;
        if config.rejection.num_subsample == Some(0) {
            anyhow::bail!("num_subsample must be a positive integer");
        }
        Ok(config)
    }
}
