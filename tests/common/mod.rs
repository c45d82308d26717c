//! Common test utilities for MediCompanion
//!
//! Shared fixtures and constructors used across the integration tests.

#![allow(dead_code)]

use std::time::Duration;

use medicompanion::{AgentClient, Config, DataClient};

/// Test configuration constants
pub mod constants {
    /// Application name used in agent paths and bodies
    pub const TEST_APP_NAME: &str = "medical_companion_agent";
    /// Agent user identifier
    pub const TEST_USER_ID: &str = "u_123";
    /// Fixed session identifier so paths can be matched exactly
    pub const TEST_SESSION_ID: &str = "s_testsession0001";
}

/// Build a config pointing both APIs at mock servers
pub fn test_config(agent_url: &str, data_url: &str) -> Config {
    Config {
        agent_api_url: agent_url.to_string(),
        agent_app_name: constants::TEST_APP_NAME.to_string(),
        agent_user_id: constants::TEST_USER_ID.to_string(),
        data_api_url: data_url.to_string(),
        request_timeout: Duration::from_secs(5),
    }
}

/// Agent client with a known session id and the given timeout
pub fn agent_client(agent_url: &str, timeout: Duration) -> AgentClient {
    let mut config = test_config(agent_url, "http://127.0.0.1:1");
    config.request_timeout = timeout;
    let http = config.http_client().expect("http client");
    AgentClient::with_session_id(http, &config, constants::TEST_SESSION_ID)
}

/// Data client against the given base URL
pub fn data_client(data_url: &str) -> DataClient {
    let config = test_config("http://127.0.0.1:1", data_url);
    let http = config.http_client().expect("http client");
    DataClient::new(http, &config)
}
