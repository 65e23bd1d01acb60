//! Domain models for the reservation ledger.

use chrono::{DateTime, Utc};
use entity::reservation::{BookingSource, ReservationStatus};

/// A booking of one room for one guest over a half-open date range
/// `[check_in, check_out)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Unique identifier for the reservation.
    pub id: i32,
    /// Account the room is booked for.
    pub guest_id: i32,
    /// Room being booked.
    pub room_id: i32,
    /// First night of the stay (inclusive).
    pub check_in: DateTime<Utc>,
    /// Departure date (exclusive); a new stay may begin on this date.
    pub check_out: DateTime<Utc>,
    /// Number of guests staying in the room.
    pub guest_count: i32,
    /// Lifecycle status of the reservation.
    pub status: ReservationStatus,
    /// Nightly price times nights, frozen at creation time.
    pub total_amount: f64,
    /// Human-facing unique booking reference.
    pub confirmation_number: String,
    /// Channel the booking came through.
    pub source: BookingSource,
    /// Timestamp when the reservation was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last status change.
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Converts an entity model to a reservation domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            guest_id: entity.guest_id,
            room_id: entity.room_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            guest_count: entity.guest_count,
            status: entity.status,
            total_amount: entity.total_amount,
            confirmation_number: entity.confirmation_number,
            source: entity.source,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for persisting a new reservation.
///
/// The service layer has already validated dates and occupancy, computed the
/// frozen total and generated the confirmation number by the time this struct
/// reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub guest_id: i32,
    pub room_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guest_count: i32,
    pub status: ReservationStatus,
    pub total_amount: f64,
    pub confirmation_number: String,
    pub source: BookingSource,
}

/// Parameters for retrieving a page of reservations.
#[derive(Debug, Clone)]
pub struct GetPaginatedReservationsParams {
    /// Restrict to a single guest's reservations (guests see only their own).
    pub guest_id: Option<i32>,
    /// Restrict to a single room.
    pub room_id: Option<i32>,
    /// Page number (0-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
}
