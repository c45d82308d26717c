//! Mock infrastructure for testing external services
//!
//! This module provides wiremock servers for the two backends:
//! - Agent API (session creation and `/run`)
//! - Data API (doctors, appointments, reports)

pub mod data;

pub use agent::*;
pub use data::*;
