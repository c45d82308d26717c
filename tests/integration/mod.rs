//! Integration tests for the MediCompanion clients
//!
//! These tests run the real HTTP clients against wiremock servers standing in
//! for the agent and data APIs.

mod chat;
mod data_client;
