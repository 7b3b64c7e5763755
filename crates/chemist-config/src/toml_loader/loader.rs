//! Core TOML config loading: read from path or platform default.

use crate::schema::ChemistConfig;
use crate::validation;
use chemist_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Read and deserialize a TOML file, using serde defaults for missing fields.
fn read_config(path: &Path) -> Result<ChemistConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// The operator named this file, so a config that fails validation is an
/// error rather than a silent swap to defaults.
pub fn load_from_path(path: &Path) -> Result<ChemistConfig, ConfigError> {
    let config = read_config(path)?;
    validation::validate(&config)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load a config file, falling back to defaults (with a warning) when its
/// values fail validation.
pub(crate) fn load_or_default(path: &Path) -> Result<ChemistConfig, ConfigError> {
    let config = read_config(path)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning in {}: {e}", path.display());
        warn!("falling back to default config");
        return Ok(ChemistConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/chemist/config.toml`
/// On Linux: `~/.config/chemist/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ChemistConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        if let Err(e) = create_default_config(&path) {
            // A read-only config dir should not stop the client from starting.
            warn!("could not write default config: {e}");
        }
        return Ok(ChemistConfig::default());
    }

    load_or_default(&path)
}
