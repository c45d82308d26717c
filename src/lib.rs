//! MediCompanion - health companion client
//!
//! This library talks to the care agent (conversation sessions, message
//! exchange with attachments) and to the data API (doctors, appointments,
//! medical reports).

pub mod agent;
pub mod chat;
pub mod config;
pub mod data;
pub mod error;

use std::sync::Arc;

use anyhow::Result;

pub use crate::agent::{AgentClient, Attachment, ConversationAgent};
pub use crate::chat::{ChatMessage, ChatRole, ChatSession, NamedAttachment};
pub use crate::config::Config;
pub use crate::data::DataClient;
pub use crate::error::{AppError, AppResult};

/// Clients shared by the front-end
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub agent_client: Arc<AgentClient>,
    pub data_client: Arc<DataClient>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // One pooled HTTP client for both APIs
        let http_client = config.http_client()?;

        let agent_client = Arc::new(AgentClient::new(http_client.clone(), &config));
        let data_client = Arc::new(DataClient::new(http_client.clone(), &config));

        Ok(Self {
            config,
            http_client,
            agent_client,
            data_client,
        })
    }

    /// Start a chat transcript backed by the agent client
    pub fn chat(&self) -> ChatSession {
        ChatSession::new(self.agent_client.clone())
    }
}
