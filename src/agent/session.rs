//! Conversation session state
//!
//! A client instance owns exactly one conversation session. Its identifier is
//! generated locally; the remote service only learns about it when the
//! session is first established.

use std::fmt;

use rand::distr::{Alphanumeric, SampleString};

/// Prefix every generated session identifier carries
const SESSION_ID_PREFIX: &str = "s_";

/// Number of random alphanumeric characters after the prefix
const SESSION_ID_RANDOM_LEN: usize = 16;

/// Opaque session identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh, non-sequential identifier
    pub fn generate() -> Self {
        let suffix = Alphanumeric.sample_string(&mut rand::rng(), SESSION_ID_RANDOM_LEN);
        Self(format!("{}{}", SESSION_ID_PREFIX, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a conversation session
///
/// There is no closed state: expiry is the remote service's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Identifier generated, creation not yet attempted
    Pending,
    /// Creation attempted (whatever the outcome); messages may be sent
    Active,
}

/// A conversation session held by one client instance
#[derive(Debug)]
pub struct ConversationSession {
    id: SessionId,
    state: SessionState,
}

impl ConversationSession {
    /// Create a pending session with a freshly generated identifier
    pub fn new() -> Self {
        Self::with_id(SessionId::generate())
    }

    /// Create a pending session with a caller-chosen identifier
    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            state: SessionState::Pending,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Record that creation was attempted. Pending -> Active; Active stays Active.
    pub(crate) fn activate(&mut self) {
        self.state = SessionState::Active;
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
