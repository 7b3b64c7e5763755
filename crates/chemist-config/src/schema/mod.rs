//! Configuration schema types for the chemist client.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the client ships with.

mod api;
mod display;
mod persona;
mod session;
mod system;

pub use api::*;
pub use display::*;
pub use persona::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChemistConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub persona: PersonaConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}
