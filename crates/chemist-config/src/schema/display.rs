//! Terminal output settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Column width for wrapping replies. 0 means detect from the terminal.
    pub wrap_width: u32,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            wrap_width: 0,
            color: true,
        }
    }
}
