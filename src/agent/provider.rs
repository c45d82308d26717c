//! Conversational agent abstraction
//!
//! The chat layer talks to whatever implements [`ConversationAgent`], so the
//! HTTP client can be swapped for an in-process stand-in.

use async_trait::async_trait;

use crate::agent::attachment::Attachment;

/// Trait defining the interface of a conversational agent
///
/// Implementations resolve every failure to displayable text: a reply is
/// never empty and never an error.
#[async_trait]
pub trait ConversationAgent: Send + Sync {
    /// Agent name for logging
    fn name(&self) -> &'static str;

    /// Send one user message and return the text to show for it
    async fn send_message(&self, text: &str, attachment: Option<&Attachment>) -> String;
}
