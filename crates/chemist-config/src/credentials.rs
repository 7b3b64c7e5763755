//! API key resolution.
//!
//! Resolution order:
//! 1. explicit value (the `--api-key` flag)
//! 2. `api.key` from the config file
//! 3. the environment variable named by `api.key_env`
//!
//! Empty or whitespace-only values are treated as absent.

use chemist_common::ConfigError;
use tracing::debug;

use crate::schema::ApiConfig;

/// Resolve the API key from the flag, config file, or process environment.
pub fn resolve_api_key(explicit: Option<&str>, api: &ApiConfig) -> Result<String, ConfigError> {
    resolve_api_key_with(explicit, api, |name| std::env::var(name).ok())
}

/// Resolve the API key using `lookup` in place of the process environment.
pub fn resolve_api_key_with(
    explicit: Option<&str>,
    api: &ApiConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    if let Some(key) = non_blank(explicit) {
        debug!("using API key from command line");
        return Ok(key.to_string());
    }

    if let Some(key) = non_blank(api.key.as_deref()) {
        debug!("using API key from config file");
        return Ok(key.to_string());
    }

    if let Some(key) = lookup(&api.key_env).filter(|k| !k.trim().is_empty()) {
        debug!(env_var = %api.key_env, "using API key from environment");
        return Ok(key);
    }

    Err(ConfigError::MissingCredential {
        env_var: api.key_env.clone(),
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
