//! Data API models
//!
//! Records served by the data API and the outcomes of the local write stubs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Status string the data API uses for successful responses
pub const STATUS_SUCCESS: &str = "success";

/// Status string for failed operations
pub const STATUS_ERROR: &str = "error";

/// A doctor's specialty and bookable slots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub specialty: String,
    #[serde(default)]
    pub free_time: Vec<String>,
}

/// Doctors keyed by display name
pub type DoctorDirectory = BTreeMap<String, Doctor>;

/// A booked appointment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub doctor: String,
    pub time_slot: String,
    #[serde(default)]
    pub booked_at: String,
}

/// Extracted summary of a medical report
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub medicines: String,
    #[serde(default)]
    pub other: String,
}

/// Response from `GET /appointments`
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentsResponse {
    pub status: String,
    #[serde(default)]
    pub appointments: Option<Vec<Appointment>>,
}

/// Response from `GET /reports`
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsResponse {
    pub status: String,
    #[serde(default)]
    pub reports: Option<Vec<ReportSummary>>,
}

/// Response from `GET /reports/{filename}`
#[derive(Debug, Clone, Deserialize)]
pub struct ReportContentResponse {
    pub status: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Result of a write operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperationOutcome {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl OperationOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: Some(message.into()),
            error_message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: Some(message.into()),
            error_message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Directory used when the data API cannot be reached
pub fn fallback_doctors() -> DoctorDirectory {
    let mut doctors = DoctorDirectory::new();
    doctors.insert(
        "Dr. Smith".to_string(),
        Doctor {
            specialty: "Cardiology".to_string(),
            free_time: vec!["Monday 10:00-12:00".to_string()],
        },
    );
    doctors.insert(
        "Dr. Jones".to_string(),
        Doctor {
            specialty: "Dermatology".to_string(),
            free_time: vec!["Tuesday 09:00-11:00".to_string()],
        },
    );
    doctors
}
