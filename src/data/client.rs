//! Data API client
//!
//! Read-mostly access to doctors, appointments and medical reports. The data
//! API is a convenience for the dashboard: every failure is logged and turned
//! into an empty result or a built-in default.

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

use crate::{
    config::Config,
    data::models::{
        fallback_doctors, Appointment, AppointmentsResponse, Doctor, DoctorDirectory,
        OperationOutcome, ReportContentResponse, ReportSummary, ReportsResponse, STATUS_SUCCESS,
    },
    error::{AppError, AppResult},
};

/// Data API client
pub struct DataClient {
    client: reqwest::Client,
    base_url: String,
}

impl DataClient {
    /// Create a new data client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.data_api_url.clone(),
        }
    }

    // =========================================================================
    // Doctors
    // =========================================================================

    /// All doctors, or the built-in directory when the API is unreachable
    #[instrument(skip(self))]
    pub async fn get_doctors(&self) -> DoctorDirectory {
        match self.get_json::<DoctorDirectory>(&["doctors"]).await {
            Ok(doctors) => doctors,
            Err(e) => {
                warn!(error = %e, "Could not fetch doctors from API, using fallback");
                fallback_doctors()
            }
        }
    }

    pub async fn get_doctor(&self, name: &str) -> Option<Doctor> {
        self.get_doctors().await.remove(name)
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn get_appointments(&self) -> Vec<Appointment> {
        match self.get_json::<AppointmentsResponse>(&["appointments"]).await {
            Ok(res) if res.status == STATUS_SUCCESS => res.appointments.unwrap_or_default(),
            Ok(res) => {
                debug!(status = %res.status, "Appointments response was not successful");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Could not fetch appointments from API");
                Vec::new()
            }
        }
    }

    /// Booking goes through the agent; the data API has no write endpoint
    pub async fn save_appointment(&self, doctor: &str, time_slot: &str) -> OperationOutcome {
        debug!(doctor = %doctor, time_slot = %time_slot, "Saving appointment locally");
        OperationOutcome::success("Mock appointment saved")
    }

    pub async fn modify_appointment(
        &self,
        current_doctor: &str,
        current_time_slot: &str,
        new_doctor: Option<&str>,
        new_time_slot: Option<&str>,
    ) -> OperationOutcome {
        debug!(
            current_doctor = %current_doctor,
            current_time_slot = %current_time_slot,
            new_doctor = ?new_doctor,
            new_time_slot = ?new_time_slot,
            "Modifying appointment locally"
        );
        OperationOutcome::success("Mock appointment modified")
    }

    pub async fn cancel_appointment(&self, doctor: &str, time_slot: &str) -> OperationOutcome {
        debug!(doctor = %doctor, time_slot = %time_slot, "Cancelling appointment locally");
        OperationOutcome::success("Mock appointment cancelled")
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Report summaries, `None` when the API did not answer with success
    #[instrument(skip(self))]
    pub async fn get_reports_summary(&self) -> Option<Vec<ReportSummary>> {
        match self.get_json::<ReportsResponse>(&["reports"]).await {
            Ok(res) if res.status == STATUS_SUCCESS => Some(res.reports.unwrap_or_default()),
            Ok(res) => {
                debug!(status = %res.status, "Reports response was not successful");
                None
            }
            Err(e) => {
                error!(error = %e, "Failed to get report summaries");
                None
            }
        }
    }

    pub async fn get_report_names(&self) -> Vec<String> {
        self.get_reports_summary()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter_map(|summary| summary.filename)
            .collect()
    }

    #[instrument(skip(self))]
    pub async fn get_report_content(&self, filename: &str) -> Option<String> {
        match self
            .get_json::<ReportContentResponse>(&["reports", filename])
            .await
        {
            Ok(res) if res.status == STATUS_SUCCESS => res.content,
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "Report content unavailable");
                None
            }
        }
    }

    /// The data API is read-only; uploads are analyzed and stored by the agent
    pub async fn save_report(&self, filename: &str, content: &str) -> (OperationOutcome, ReportSummary) {
        warn!(filename = %filename, content_len = content.len(), "Save report not implemented in data API");
        (
            OperationOutcome::error("API save not implemented"),
            ReportSummary::default(),
        )
    }

    // =========================================================================
    // Medicine
    // =========================================================================

    pub async fn order_medicine(&self, medicine_name: &str, quantity: u32) -> OperationOutcome {
        debug!(medicine = %medicine_name, quantity, "Ordering medicine locally");
        OperationOutcome::success("Mock order placed")
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::BadRequest(format!("Invalid data API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::BadRequest("Data API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> AppResult<T> {
        let url = self.endpoint(segments)?;

        debug!(url = %url, "Fetching from data API");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!(status = %status, "Data API response status");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::upstream(status, text));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
