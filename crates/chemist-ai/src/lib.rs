//! Conversation engine for the chemist client.
//!
//! Provides:
//! - `ConversationState`, the ordered turn log seeded with the persona pair
//! - `GeminiClient`, a `generateContent` client for the Generative Language API
//! - `ChatSession`, which turns one line of user text into one model reply

pub mod conversation;
pub mod gemini;
pub mod persona;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

use async_trait::async_trait;

pub use conversation::{ConversationState, Role, Turn};
pub use gemini::{GeminiClient, GeminiConfig};
pub use persona::Persona;
pub use session::{ChatSession, Exchange, SessionPhase, SENTINEL_REPLY};

/// A remote model that answers a full conversation with one completion.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn generate(&self, turns: &[Turn]) -> Result<Completion, AiError>;
}

/// What a successful call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Text of the first candidate. Empty when the candidate had no text part.
    Candidate(String),
    /// The response carried no usable `candidates` array.
    NoCandidates,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API request failed: {message}\nStatus code: {status}")]
    Http { status: u16, message: String },
    #[error("API request failed: {0}")]
    Network(String),
    #[error("API request failed: invalid response body: {0}")]
    Parse(String),
}

impl AiError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
