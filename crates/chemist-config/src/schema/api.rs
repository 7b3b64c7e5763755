//! Remote model endpoint configuration.

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the API key when none is configured.
pub const DEFAULT_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default Generative Language API host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model id.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Endpoint and credential settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Explicit API key. Takes precedence over `key_env`.
    pub key: Option<String>,
    /// Name of the environment variable holding the API key.
    pub key_env: String,
    pub base_url: String,
    pub model: String,
    /// Request timeout in seconds. 0 disables the timeout.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("key_env", &self.key_env)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            key_env: DEFAULT_KEY_ENV.into(),
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            timeout_secs: 0,
        }
    }
}
