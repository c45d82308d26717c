//! Agent API data models
//!
//! Data structures for the `/run` request body and the events it answers with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::agent::attachment::Attachment;

/// Role tag on user-authored messages
pub const USER_ROLE: &str = "user";

/// Role tag on events whose text is shown to the user
pub const MODEL_ROLE: &str = "model";

/// Label sent with every inline attachment
pub const ATTACHMENT_DISPLAY_NAME: &str = "attachment";

/// Request body for `POST /run`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    pub app_name: String,
    pub user_id: String,
    pub session_id: String,
    pub new_message: NewMessage,
    pub streaming: bool,
}

/// The user-authored message inside a run request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMessage {
    pub role: String,
    pub parts: Vec<Part>,
}

impl NewMessage {
    /// Text part first (verbatim, even when empty), then the attachment if any
    pub fn from_user(text: &str, attachment: Option<&Attachment>) -> Self {
        let mut parts = vec![Part::Text {
            text: text.to_string(),
        }];

        if let Some(attachment) = attachment {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: attachment.mime_type.clone(),
                    data: attachment.data.clone(),
                    display_name: ATTACHMENT_DISPLAY_NAME.to_string(),
                },
            });
        }

        Self {
            role: USER_ROLE.to_string(),
            parts,
        }
    }
}

/// One unit of outbound message content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 attachment payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
    pub display_name: String,
}

/// One step of the agent's processing, as returned by `/run`
///
/// Every field is optional; the agent emits tool calls, tool results and
/// user echoes alongside model text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub content: Option<EventContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventContent {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Option<Vec<EventPart>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPart {
    #[serde(default)]
    pub text: Option<String>,
}

impl Event {
    /// Decode one raw event. Shapes that don't fit yield `None`.
    pub fn decode(raw: Value) -> Option<Self> {
        serde_json::from_value(raw).ok()
    }

    /// Model-authored text fragments of this event, in order
    pub fn model_texts(&self) -> impl Iterator<Item = &str> {
        self.content
            .as_ref()
            .filter(|c| c.role.as_deref() == Some(MODEL_ROLE))
            .and_then(|c| c.parts.as_deref())
            .unwrap_or_default()
            .iter()
            .filter_map(|p| p.text.as_deref())
    }
}

/// Concatenate the model text of a `/run` response body
///
/// Non-array bodies and malformed events contribute nothing.
pub fn aggregate_model_text(body: &Value) -> String {
    let Value::Array(raw_events) = body else {
        return String::new();
    };

    raw_events
        .iter()
        .cloned()
        .filter_map(Event::decode)
        .fold(String::new(), |mut out, event| {
            event.model_texts().for_each(|t| out.push_str(t));
            out
        })
}
