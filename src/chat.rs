//! Chat transcript
//!
//! Keeps the visible conversation with the agent: what the user sent, what
//! the agent answered, and system notices.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    agent::{Attachment, ConversationAgent},
    error::{AppError, AppResult},
};

pub const WELCOME_MESSAGE: &str = "Hello! I am your MediCompanion. I can help you book appointments, manage your medical reports, or order medicine. You can also upload a medical report for me to analyze and save.";

/// Notice shown when an exchange fails outside the agent client
pub const FAILURE_NOTICE: &str = "Something went wrong. Please try again.";

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
    System,
}

/// An attachment together with the name it was picked under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedAttachment {
    pub name: String,
    pub attachment: Attachment,
}

/// One transcript entry
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, text: impl Into<String>, attachment_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            attachment_name,
            timestamp: Utc::now(),
        }
    }
}

/// Conversation transcript bound to one agent
pub struct ChatSession {
    agent: Arc<dyn ConversationAgent>,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(agent: Arc<dyn ConversationAgent>) -> Self {
        Self {
            agent,
            messages: vec![ChatMessage::new(ChatRole::Model, WELCOME_MESSAGE, None)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send user input and record the agent's reply
    ///
    /// Input with blank text and no attachment is rejected before anything is
    /// recorded or sent.
    #[instrument(skip(self, text, attachment), fields(agent = self.agent.name()))]
    pub async fn send(
        &mut self,
        text: &str,
        attachment: Option<NamedAttachment>,
    ) -> AppResult<&ChatMessage> {
        if text.trim().is_empty() && attachment.is_none() {
            return Err(AppError::BadRequest(
                "Message needs text or an attachment".to_string(),
            ));
        }

        let attachment_name = attachment.as_ref().map(|a| a.name.clone());
        self.messages
            .push(ChatMessage::new(ChatRole::User, text, attachment_name));

        let reply = self
            .agent
            .send_message(text, attachment.as_ref().map(|a| &a.attachment))
            .await;
        debug!(reply_len = reply.len(), "Agent replied");

        Ok(self.push(ChatRole::Model, reply))
    }

    /// Record a system notice, e.g. after a failed exchange
    pub fn notify(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatRole::System, text.into())
    }

    fn push(&mut self, role: ChatRole, text: String) -> &ChatMessage {
        self.messages.push(ChatMessage::new(role, text, None));
        &self.messages[self.messages.len() - 1]
    }
}
