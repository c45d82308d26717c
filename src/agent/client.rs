//! Agent API client
//!
//! HTTP client for exchanging messages with the conversational agent.
//! Every failure is resolved into one of the fixed replies below, so callers
//! always get something to display.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, error, instrument, warn};

use crate::{
    agent::{
        attachment::Attachment,
        models::{aggregate_model_text, NewMessage, RunRequest},
        provider::ConversationAgent,
        session::{ConversationSession, SessionId},
    },
    config::Config,
    error::{AppError, AppResult},
};

/// Shown when the agent answers 429
pub const RATE_LIMITED_REPLY: &str =
    "I'm receiving too many requests right now (Rate Limit Exceeded). Please try again in a minute.";

/// Shown for any other failure, including timeouts and undecodable bodies
pub const CONNECTIVITY_REPLY: &str =
    "I'm having trouble connecting to the Agent. Please ensure the backend is running.";

/// Shown when the agent succeeded without producing model text
pub const NO_TEXT_REPLY: &str = "I processed your request but didn't have a text response.";

/// Agent API client
///
/// Holds one conversation session for its whole lifetime. The session lock
/// is held across establishment and the `/run` call, so message exchanges on
/// one client never overlap.
pub struct AgentClient {
    client: reqwest::Client,
    base_url: String,
    app_name: String,
    user_id: String,
    session_id: SessionId,
    session: Mutex<ConversationSession>,
}

impl AgentClient {
    /// Create a new agent client with a freshly generated session
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self::with_session(client, config, ConversationSession::new())
    }

    /// Create an agent client bound to a known session identifier
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_session_id(client: reqwest::Client, config: &Config, session_id: &str) -> Self {
        let session = ConversationSession::with_id(SessionId::from(session_id.to_string()));
        Self::with_session(client, config, session)
    }

    fn with_session(client: reqwest::Client, config: &Config, session: ConversationSession) -> Self {
        Self {
            client,
            base_url: config.agent_api_url.clone(),
            app_name: config.agent_app_name.clone(),
            user_id: config.agent_user_id.clone(),
            session_id: session.id().clone(),
            session: Mutex::new(session),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Whether session creation has been attempted yet
    pub async fn is_session_active(&self) -> bool {
        self.session.lock().await.is_active()
    }

    /// Create the remote session once; later calls do nothing
    ///
    /// Creation failures are logged and tolerated: the session is marked
    /// active regardless and the next `/run` goes ahead optimistically.
    pub async fn ensure_session(&self) {
        let mut session = self.session.lock().await;
        self.establish(&mut session).await;
    }

    /// Send a message and return the text to display
    ///
    /// Never returns an empty string and never fails.
    #[instrument(skip(self, text, attachment), fields(session_id = %self.session_id, has_attachment = attachment.is_some()))]
    pub async fn send_message(&self, text: &str, attachment: Option<&Attachment>) -> String {
        match self.try_send_message(text, attachment).await {
            Ok(reply) if reply.is_empty() => {
                debug!("Agent returned no model text");
                NO_TEXT_REPLY.to_string()
            }
            Ok(reply) => reply,
            Err(AppError::RateLimited) => {
                warn!("Agent rate limit exceeded");
                RATE_LIMITED_REPLY.to_string()
            }
            Err(e) if e.is_transport() => {
                error!(error = %e, "Agent unreachable");
                CONNECTIVITY_REPLY.to_string()
            }
            Err(e) => {
                error!(error = %e, "Agent API error");
                CONNECTIVITY_REPLY.to_string()
            }
        }
    }

    /// Send a message and return the raw aggregated model text
    ///
    /// Unlike [`send_message`](Self::send_message) this keeps the failure
    /// classes apart: 429 is `AppError::RateLimited`, any other non-success
    /// status is `AppError::UpstreamError`. An empty string means the agent
    /// succeeded without model text.
    pub async fn try_send_message(
        &self,
        text: &str,
        attachment: Option<&Attachment>,
    ) -> AppResult<String> {
        let mut session = self.session.lock().await;
        self.establish(&mut session).await;

        let request = RunRequest {
            app_name: self.app_name.clone(),
            user_id: self.user_id.clone(),
            session_id: session.id().to_string(),
            new_message: NewMessage::from_user(text, attachment),
            streaming: false,
        };

        self.run(&request).await
    }

    async fn establish(&self, session: &mut ConversationSession) {
        if session.is_active() {
            return;
        }

        match self.create_session(session.id()).await {
            Ok(()) => debug!(session_id = %session.id(), "Agent session created"),
            Err(AppError::UpstreamError { status, body }) => {
                warn!(status = %status, body = %body, "Session creation warning");
            }
            Err(e) => {
                error!(error = %e, "Failed to create session");
            }
        }

        // The agent may create sessions implicitly on the first run.
        session.activate();
    }

    #[instrument(skip(self), fields(session_id = %session_id))]
    async fn create_session(&self, session_id: &SessionId) -> AppResult<()> {
        let url = self.endpoint(&[
            "apps",
            &self.app_name,
            "users",
            &self.user_id,
            "sessions",
            session_id.as_str(),
        ])?;

        debug!(url = %url, "Creating agent session");

        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "Agent session response status");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::upstream(status, text));
        }

        Ok(())
    }

    async fn run(&self, request: &RunRequest) -> AppResult<String> {
        let url = self.endpoint(&["run"])?;

        debug!(url = %url, parts = request.new_message.parts.len(), "Sending message to agent");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send request to agent");
                e
            })?;

        let status = response.status();
        debug!(status = %status, "Agent run response status");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::RateLimited);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(status = %status, body = %text, "Agent run request failed");
            return Err(AppError::upstream(status, text));
        }

        let body = response.text().await?;
        debug!(body_len = body.len(), "Agent run response body");

        let events: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(e) => {
                error!(error = %e, body = %body, "Failed to parse agent run response");
                return Err(AppError::InvalidResponse(format!(
                    "Failed to parse agent response: {}",
                    e
                )));
            }
        };

        Ok(aggregate_model_text(&events))
    }

    /// Join escaped path segments onto the base URL
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::BadRequest(format!("Invalid agent API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::BadRequest("Agent API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl ConversationAgent for AgentClient {
    fn name(&self) -> &'static str {
        "agent-api"
    }

    async fn send_message(&self, text: &str, attachment: Option<&Attachment>) -> String {
        AgentClient::send_message(self, text, attachment).await
    }
}
