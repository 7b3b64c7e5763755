//! Conversation session management.
//!
//! A `ChatSession` owns the conversation history and turns one line of
//! user text into one model reply: append the user turn, send the whole
//! history, and append the model turn only when a candidate came back.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::ChatSession;
pub use types::{Exchange, SessionPhase, SENTINEL_REPLY};
