//! ChatSession struct and history management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::conversation::{ConversationState, Turn};
use crate::persona::Persona;
use crate::AiClient;

use super::types::SessionPhase;

/// A conversation with one remote model.
///
/// `submit` and `reset` are serialized by the history lock: a second
/// caller waits for the in-flight request to finish instead of
/// interleaving its turns.
pub struct ChatSession {
    /// Conversation history, held for the whole request lifecycle.
    pub(super) state: Mutex<ConversationState>,
    pub(super) client: Arc<dyn AiClient>,
    /// Drop the unanswered user turn when a request fails.
    pub(super) rollback_failed_turns: bool,
    /// True while a request is in flight.
    pub(super) awaiting: AtomicBool,
}

impl ChatSession {
    pub fn new(client: Arc<dyn AiClient>, persona: Persona) -> Self {
        Self {
            state: Mutex::new(ConversationState::new(persona)),
            client,
            rollback_failed_turns: false,
            awaiting: AtomicBool::new(false),
        }
    }

    pub fn with_rollback_failed_turns(mut self, rollback: bool) -> Self {
        self.rollback_failed_turns = rollback;
        self
    }

    /// Discard everything and re-seed the persona pair.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        debug!(dropped = state.len().saturating_sub(2), "Resetting conversation");
        state.reset();
    }

    /// Copy of the full turn sequence.
    pub async fn snapshot(&self) -> Vec<Turn> {
        self.state.lock().await.snapshot().to_vec()
    }

    pub async fn turn_count(&self) -> usize {
        self.state.lock().await.len()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.awaiting.load(Ordering::Acquire) {
            SessionPhase::AwaitingReply
        } else {
            SessionPhase::Idle
        }
    }
}
