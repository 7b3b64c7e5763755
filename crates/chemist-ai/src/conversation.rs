//! Conversation history.
//!
//! `ConversationState` is the ordered log replayed to the model on every
//! call. It always opens with the persona pair: the greeting as a `model`
//! turn, then the instructions as a `user` turn.

use crate::persona::Persona;

/// Speaker of a turn. The names match the Gemini role vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }
}

/// Ordered turn log, seeded with the persona pair.
#[derive(Debug, Clone)]
pub struct ConversationState {
    turns: Vec<Turn>,
    persona: Persona,
}

impl ConversationState {
    /// Create an initialized state for `persona`.
    pub fn new(persona: Persona) -> Self {
        let mut state = Self {
            turns: Vec::new(),
            persona,
        };
        state.initialize();
        state
    }

    /// Drop every turn and re-seed the persona pair.
    pub fn initialize(&mut self) {
        self.turns.clear();
        self.turns.push(Turn::model(self.persona.greeting.clone()));
        self.turns.push(Turn::user(self.persona.instructions.clone()));
    }

    pub fn append(&mut self, role: Role, text: impl Into<String>) {
        self.turns.push(Turn::new(role, text));
    }

    /// Start a fresh topic without re-explaining the persona.
    pub fn reset(&mut self) {
        self.initialize();
    }

    /// The full turn sequence, exactly as it is sent to the model.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false once initialized; provided alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Drop turns past `len`, never cutting into the persona pair.
    pub(crate) fn truncate_to(&mut self, len: usize) {
        self.turns.truncate(len.max(2));
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new(Persona::default())
    }
}
