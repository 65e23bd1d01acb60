//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::{mailer::Mailer, service::reservation::locks::RoomLocks};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Mailer` wraps a reference-counted SMTP transport
/// - `RoomLocks` shares its registry through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Outbound email handle, log-only when no SMTP relay is configured.
    pub mailer: Mailer,

    /// Per-room booking locks serializing concurrent bookings of one room.
    pub booking_locks: RoomLocks,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is provided to the Axum router.
    pub fn new(db: DatabaseConnection, mailer: Mailer) -> Self {
        Self {
            db,
            mailer,
            booking_locks: RoomLocks::new(),
        }
    }
}
