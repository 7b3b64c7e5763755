//! Configuration for the chemist client.
//!
//! Provides TOML-based configuration with validation and API key
//! resolution. All config sections use sensible defaults so partial
//! configs work out of the box.

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::{resolve_api_key, resolve_api_key_with};
pub use schema::ChemistConfig;

use std::path::Path;

use chemist_common::ConfigError;

/// Load config from `path` if given, otherwise from the platform default
/// location.
///
/// An explicit path must exist and pass validation. The default location
/// is created with a commented template on first run, and falls back to
/// defaults with a warning if its values are invalid.
pub fn load_config(path: Option<&Path>) -> Result<ChemistConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
