//! Data API integration module
//!
//! Provides the client for the doctors/appointments/reports API.

pub mod client;
pub mod models;

pub use client::DataClient;
pub use models::*;
