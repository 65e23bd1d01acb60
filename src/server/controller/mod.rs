//! HTTP API controllers.
//!
//! This module contains the axum request handlers for the REST API. Controllers
//! extract and validate request data, enforce authentication and authorization
//! through the auth guard, delegate business logic to the service layer, and
//! shape responses as JSON DTOs.

pub mod auth;
pub mod billing;
pub mod notification;
pub mod reservation;
pub mod room;
pub mod setting;

use serde::Deserialize;

/// Shared pagination query parameters.
#[derive(Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}
