//! Chat transcript integration tests
//!
//! Drives a `ChatSession` through the real agent client.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use medicompanion::agent::{Attachment, CONNECTIVITY_REPLY};
use medicompanion::{ChatRole, ChatSession, NamedAttachment};

use crate::common::agent_client;
use crate::mocks::{AgentEvents, MockAgentServer};

#[tokio::test]
async fn test_chat_round_trip_through_agent() {
    let server = MockAgentServer::start().await;
    server.mock_create_session_success().await;
    server
        .mock_run_events(AgentEvents::reply("Your appointment is booked."))
        .await;
    let agent = Arc::new(agent_client(&server.uri(), Duration::from_secs(5)));
    let mut chat = ChatSession::new(agent);

    let reply = chat
        .send("Book Dr. Smith on Monday", None)
        .await
        .unwrap()
        .text
        .clone();

    assert_eq!(reply, "Your appointment is booked.");
    assert_eq!(chat.messages().len(), 3);
    assert_eq!(chat.messages()[1].role, ChatRole::User);
}

#[tokio::test]
async fn test_chat_shows_connectivity_reply_as_model_message() {
    let agent = Arc::new(agent_client("http://127.0.0.1:1", Duration::from_secs(5)));
    let mut chat = ChatSession::new(agent);
    let attachment = NamedAttachment {
        name: "report.txt".to_string(),
        attachment: Attachment::from_bytes("text/plain", b"Diagnosis: flu"),
    };

    let reply = chat.send("Please save this", Some(attachment)).await.unwrap();

    assert_eq!(reply.role, ChatRole::Model);
    assert_eq!(reply.text, CONNECTIVITY_REPLY);
}

#[tokio::test]
async fn test_blank_chat_input_sends_nothing() {
    let server = MockAgentServer::start().await;
    let agent = Arc::new(agent_client(&server.uri(), Duration::from_secs(5)));
    let mut chat = ChatSession::new(agent);

    assert!(chat.send("", None).await.is_err());
    assert!(server.received_requests().await.is_empty());
}
