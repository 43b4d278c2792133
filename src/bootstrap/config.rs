//! # Configuration loader
//!
//! Precedence, lowest first: built-in defaults, the optional TOML file given
//! with `--config`, the positional port argument.

use std::path::Path;

use anyhow::Context;
use clips_core::AppConfig;
use tracing::info;

use crate::cli::Cli;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read, is not valid TOML, or holds a
/// value of the wrong type.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

/// Effective configuration for this process.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading config file");
            load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(port) = cli.port {
        config.port = port;
    }

    Ok(config)
}
