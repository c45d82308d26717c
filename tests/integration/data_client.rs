//! Data client integration tests
//!
//! Reads against a mock data API, and the fallbacks when it misbehaves.

use pretty_assertions::assert_eq;
use serde_json::json;

use medicompanion::data::fallback_doctors;

use crate::common::data_client;
use crate::mocks::{DataTestData, MockDataServer};

#[tokio::test]
async fn test_get_doctors() {
    let server = MockDataServer::start().await;
    server.mock_get("/doctors", DataTestData::doctors()).await;
    let client = data_client(&server.uri());

    let doctors = client.get_doctors().await;

    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors["Dr. Patel"].specialty, "Neurology");

    let smith = client.get_doctor("Dr. Smith").await.unwrap();
    assert_eq!(smith.free_time.len(), 2);
    assert!(client.get_doctor("Dr. Who").await.is_none());
}

#[tokio::test]
async fn test_doctors_fall_back_on_server_error() {
    let server = MockDataServer::start().await;
    server.mock_all_status(500).await;
    let client = data_client(&server.uri());

    assert_eq!(client.get_doctors().await, fallback_doctors());
}

#[tokio::test]
async fn test_get_appointments() {
    let server = MockDataServer::start().await;
    server.mock_get("/appointments", DataTestData::appointments()).await;
    let client = data_client(&server.uri());

    let appointments = client.get_appointments().await;

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].doctor, "Dr. Smith");
    assert_eq!(appointments[0].time_slot, "Monday 10:00-12:00");
}

#[tokio::test]
async fn test_appointments_with_error_status_are_empty() {
    let server = MockDataServer::start().await;
    server
        .mock_get("/appointments", json!({ "status": "error", "appointments": [] }))
        .await;
    let client = data_client(&server.uri());

    assert!(client.get_appointments().await.is_empty());
}

#[tokio::test]
async fn test_reports_summary_and_names() {
    let server = MockDataServer::start().await;
    server.mock_get("/reports", DataTestData::reports()).await;
    let client = data_client(&server.uri());

    let summaries = client.get_reports_summary().await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].diagnosis, "Mild anemia");

    assert_eq!(
        client.get_report_names().await,
        vec!["blood_test.txt".to_string(), "xray_notes.txt".to_string()]
    );
}

#[tokio::test]
async fn test_get_report_content() {
    let server = MockDataServer::start().await;
    server
        .mock_get(
            "/reports/blood_test.txt",
            DataTestData::report_content("blood_test.txt", "Date: 2025-02-11\nDiagnosis: Mild anemia"),
        )
        .await;
    let client = data_client(&server.uri());

    assert_eq!(
        client.get_report_content("blood_test.txt").await.as_deref(),
        Some("Date: 2025-02-11\nDiagnosis: Mild anemia")
    );
}

#[tokio::test]
async fn test_missing_report_is_none() {
    let server = MockDataServer::start().await;
    server.mock_all_status(404).await;
    let client = data_client(&server.uri());

    assert!(client.get_report_content("missing.txt").await.is_none());
    assert!(client.get_reports_summary().await.is_none());
}

#[tokio::test]
async fn test_report_filename_is_escaped() {
    let server = MockDataServer::start().await;
    server.mock_all_status(404).await;
    let client = data_client(&server.uri());

    assert!(client.get_report_content("blood test.txt").await.is_none());

    let requests = server.received_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/reports/blood%20test.txt");
}
