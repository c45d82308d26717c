//! Configuration management for MediCompanion
//!
//! Configuration is loaded from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Agent API base URL (session creation and `/run`)
    pub agent_api_url: String,
    /// Application name the agent sessions live under
    pub agent_app_name: String,
    /// User identifier the agent sessions live under
    pub agent_user_id: String,

    /// Data API base URL (doctors, appointments, reports)
    pub data_api_url: String,

    /// Upper bound for every outbound request
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let request_timeout = parse_timeout(env::var("REQUEST_TIMEOUT_SECONDS").ok())?;

        Ok(Self {
            agent_api_url: trim_base_url(
                env::var("AGENT_API_URL").unwrap_or_else(|_| "http://localhost:8002".to_string()),
            ),
            agent_app_name: env::var("AGENT_APP_NAME")
                .unwrap_or_else(|_| "medical_companion_agent".to_string()),
            agent_user_id: env::var("AGENT_USER_ID").unwrap_or_else(|_| "u_123".to_string()),

            data_api_url: trim_base_url(
                env::var("DATA_API_URL").unwrap_or_else(|_| "http://localhost:8001".to_string()),
            ),

            request_timeout,
        })
    }

    /// Build the shared HTTP client honoring the configured timeout
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .context("Failed to build HTTP client")
    }
}

/// Seconds from `REQUEST_TIMEOUT_SECONDS`, defaulting to 60; zero is rejected
fn parse_timeout(raw: Option<String>) -> Result<Duration> {
    let seconds: u64 = raw
        .as_deref()
        .unwrap_or("60")
        .parse()
        .context("Invalid REQUEST_TIMEOUT_SECONDS")?;
    if seconds == 0 {
        bail!("REQUEST_TIMEOUT_SECONDS must be greater than zero");
    }
    Ok(Duration::from_secs(seconds))
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
