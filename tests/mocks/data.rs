//! Mock data API server for testing
//!
//! Provides wiremock-based mocks for the data endpoints:
//! - GET /doctors
//! - GET /appointments
//! - GET /reports
//! - GET /reports/{filename}

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock data API server wrapper
pub struct MockDataServer {
    server: MockServer,
}

impl MockDataServer {
    /// Start a new mock data server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Get all received requests (for assertion in tests)
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Mock `GET {endpoint}` answering 200 with `body`
    pub async fn mock_get(&self, endpoint: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock every GET answering with `status`
    pub async fn mock_all_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path_regex(r".*"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "detail": "Internal Server Error"
            })))
            .mount(&self.server)
            .await;
    }
}

/// Canned data API payloads
pub struct DataTestData;

impl DataTestData {
    pub fn doctors() -> Value {
        json!({
            "Dr. Patel": { "specialty": "Neurology", "free_time": ["Friday 14:00-16:00"] },
            "Dr. Smith": { "specialty": "Cardiology", "free_time": ["Monday 10:00-12:00", "Wednesday 15:00-17:00"] }
        })
    }

    pub fn appointments() -> Value {
        json!({
            "status": "success",
            "appointments": [
                {
                    "doctor": "Dr. Smith",
                    "time_slot": "Monday 10:00-12:00",
                    "booked_at": "2025-03-01T09:30:00"
                }
            ]
        })
    }

    pub fn reports() -> Value {
        json!({
            "status": "success",
            "reports": [
                {
                    "filename": "blood_test.txt",
                    "date": "2025-02-11",
                    "diagnosis": "Mild anemia",
                    "medicines": "Iron supplements",
                    "other": "Symptoms: fatigue"
                },
                {
                    "filename": "xray_notes.txt",
                    "date": "2025-01-20",
                    "diagnosis": "No fracture",
                    "medicines": "None mentioned",
                    "other": ""
                }
            ]
        })
    }

    pub fn report_content(filename: &str, content: &str) -> Value {
        json!({ "status": "success", "filename": filename, "content": content })
    }
}
