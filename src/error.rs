//! Error types for MediCompanion
//!
//! This module defines custom error types used throughout the client.
//! Most of them never reach the user: the agent client translates every
//! failure into a displayable reply, and the data client falls back to
//! defaults.

use reqwest::StatusCode;
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Upstream error {status}: {body}")]
    UpstreamError { status: StatusCode, body: String },

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Build an upstream error from a non-success status and its body
    pub fn upstream(status: StatusCode, body: impl Into<String>) -> Self {
        AppError::UpstreamError {
            status,
            body: body.into(),
        }
    }

    /// Whether the HTTP exchange itself failed (connect, timeout, body read)
    ///
    /// A response that arrived but could not be decoded is `InvalidResponse`,
    /// not a transport failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::HttpError(_))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
