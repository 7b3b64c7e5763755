//! Conversation session behaviour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Drop the unanswered user turn when a request fails, instead of
    /// leaving it in the history for the next request.
    pub rollback_failed_turns: bool,
}
