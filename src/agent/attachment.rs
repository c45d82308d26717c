//! Inline attachments sent alongside a user message
//!
//! The agent accepts attachments as base64 payloads. Browsers and file
//! pickers often hand out data URIs (`data:<mime>;base64,<payload>`); only the
//! payload portion may go on the wire.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

use crate::error::{AppError, AppResult};

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A single base64-encoded attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub mime_type: String,
    /// Base64 payload, never prefixed with a data URI header
    pub data: String,
}

impl Attachment {
    /// Encode raw bytes
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: BASE64_STANDARD.encode(bytes),
        }
    }

    /// Wrap an already-encoded payload, dropping any data URI prefix
    pub fn from_base64(mime_type: impl Into<String>, data: &str) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: strip_data_uri_prefix(data).to_string(),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URI
    pub fn from_data_uri(uri: &str) -> AppResult<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| AppError::BadRequest("Attachment is not a data URI".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| AppError::BadRequest("Data URI has no payload".to_string()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| AppError::BadRequest("Data URI is not base64-encoded".to_string()))?;

        let mime_type = if mime_type.is_empty() {
            DEFAULT_MIME_TYPE
        } else {
            mime_type
        };

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: payload.to_string(),
        })
    }

    /// Read a file from disk, guessing the mime type from its extension
    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_bytes(guess_mime_type(path), &bytes))
    }

    /// Decode the payload back to raw bytes
    pub fn decode(&self) -> AppResult<Vec<u8>> {
        BASE64_STANDARD
            .decode(&self.data)
            .map_err(|e| AppError::BadRequest(format!("Invalid base64 attachment: {}", e)))
    }
}

/// Keep only what follows the first comma of a data URI; other input is returned as is
pub fn strip_data_uri_prefix(data: &str) -> &str {
    if data.starts_with("data:") {
        if let Some((_, payload)) = data.split_once(',') {
            return payload;
        }
    }
    data
}

fn guess_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}
