//! CLI configuration.

use anyhow::{Context, Result};
use naela_commerce::config::StorefrontConfig;
use naela_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
///
/// The storefront sections (`[shop]`, `[messaging]`) sit at
/// the top level next to `[logging]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Storefront configuration.
    #[serde(flatten)]
    pub storefront: StorefrontConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}
