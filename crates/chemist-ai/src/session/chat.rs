//! The submit path: append, send, and record the reply.

use tracing::{debug, warn};

use crate::conversation::Role;
use crate::{AiError, Completion};

use super::manager::ChatSession;
use super::types::{Exchange, PhaseGuard};

impl ChatSession {
    /// Send `user_text` and return the reply, or the transport error.
    ///
    /// A success response without candidates yields `SENTINEL_REPLY` as
    /// an `Ok` value. Use `exchange` to tell it apart from a real answer.
    pub async fn submit(&self, user_text: impl Into<String>) -> Result<String, AiError> {
        self.exchange(user_text).await.into_result()
    }

    /// Send `user_text` and report exactly what happened.
    pub async fn exchange(&self, user_text: impl Into<String>) -> Exchange {
        let mut state = self.state.lock().await;
        let _phase = PhaseGuard::enter(&self.awaiting);

        let len_before = state.len();
        state.append(Role::User, user_text);

        debug!(turns = state.len(), "Submitting conversation");
        let result = self.client.generate(state.snapshot()).await;

        match result {
            Ok(Completion::Candidate(text)) => {
                state.append(Role::Model, text.clone());
                Exchange::Reply(text)
            }
            Ok(Completion::NoCandidates) => {
                warn!("Response had no candidates, returning sentinel reply");
                Exchange::SentinelParseFailure
            }
            Err(e) => {
                warn!(status = ?e.status(), "Request failed: {e}");
                if self.rollback_failed_turns {
                    state.truncate_to(len_before);
                }
                Exchange::TransportFailure(e)
            }
        }
    }
}
