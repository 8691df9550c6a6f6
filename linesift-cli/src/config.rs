//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Output placement configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Routing configuration
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory the three category files are written to
    pub directory: String,

    /// Filename prefix for the category files
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            prefix: String::new(),
        }
    }
}

/// Routing-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct RoutingConfig {
    /// Append to pre-existing category files instead of truncating them
    pub append: bool,
}

impl CliConfig {
    /// Loads configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }
}
