//! Session outcome types and the phase guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::AiError;

/// Reply returned when a success response carries no usable candidate.
pub const SENTINEL_REPLY: &str = "Error: Unable to parse API response";

/// Outcome of one submit.
#[derive(Debug)]
pub enum Exchange {
    /// The model answered; the text was appended as a `model` turn.
    Reply(String),
    /// The server answered successfully but without candidates.
    /// Nothing was appended; callers see `SENTINEL_REPLY`.
    SentinelParseFailure,
    /// The request failed. The user turn stays in history unless the
    /// session rolls failed turns back.
    TransportFailure(AiError),
}

impl Exchange {
    /// Collapse into the reply-or-error shape the REPL consumes. The
    /// sentinel is reported as an ordinary reply.
    pub fn into_result(self) -> Result<String, AiError> {
        match self {
            Exchange::Reply(text) => Ok(text),
            Exchange::SentinelParseFailure => Ok(SENTINEL_REPLY.to_string()),
            Exchange::TransportFailure(e) => Err(e),
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, Exchange::Reply(_))
    }
}

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    AwaitingReply,
}

/// Marks the session as awaiting a reply until dropped, so the flag is
/// cleared on every exit path, including a cancelled future.
pub(crate) struct PhaseGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PhaseGuard<'a> {
    pub(crate) fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self { flag }
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
