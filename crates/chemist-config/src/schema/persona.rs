//! Persona text overrides.

use serde::{Deserialize, Serialize};

/// Optional replacements for the built-in persona pair. Unset fields keep
/// the built-in text.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PersonaConfig {
    pub greeting: Option<String>,
    pub instructions: Option<String>,
}
