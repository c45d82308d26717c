//! Agent API integration module
//!
//! Provides the client for conversing with the remote care agent.

pub mod attachment;
pub mod client;
pub mod models;
pub mod provider;
pub mod session;

pub use attachment::Attachment;
pub use client::{AgentClient, CONNECTIVITY_REPLY, NO_TEXT_REPLY, RATE_LIMITED_REPLY};
pub use provider::ConversationAgent;
pub use session::{ConversationSession, SessionId, SessionState};
