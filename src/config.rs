//! Configuration for the to-do MCP server
//!
//! Settings come from an optional TOML file. Every key is optional and falls
//! back to its default, so an empty file is a valid configuration.

use crate::todo::{Filters, SortKey};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view: ViewConfig,
    pub logging: LoggingConfig,
}

/// Default view applied by `list` when a parameter is omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub sort: SortKey,
    pub important_only: bool,
    pub done_only: bool,
}

impl ViewConfig {
    pub fn filters(&self) -> Filters {
        Filters {
            important: self.important_only,
            done: self.done_only,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set (e.g., "info", "debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, or defaults if no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
