use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use entity::reservation::ReservationStatus;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Domain errors raised by the reservation ledger and billing generator.
///
/// Validation failures map to 400 Bad Request; conflicts with existing state
/// (double-booking, duplicate room numbers, disallowed transitions) map to
/// 409 Conflict. All of these are synchronous failures that block persistence.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Check-out date is not strictly after the check-in date.
    #[error("Check-out date must be after check-in date")]
    InvalidDateRange,

    /// Requested guest count exceeds the room's maximum occupancy.
    ///
    /// # Fields
    /// - Requested guest count
    /// - Room's maximum occupancy
    #[error("Guest count {0} exceeds room capacity of {1}")]
    OccupancyExceeded(i32, i32),

    /// The room already has a confirmed or checked-in reservation whose
    /// half-open date interval overlaps the requested one.
    ///
    /// # Fields
    /// - Room id
    /// - Check-in of the conflicting reservation
    /// - Check-out of the conflicting reservation
    #[error("Room {0} is unavailable for the requested dates")]
    RoomUnavailable(i32, DateTime<Utc>, DateTime<Utc>),

    /// A room with this room number already exists.
    #[error("Room number {0} is already in use")]
    DuplicateRoomNumber(String),

    /// The requested status change is not allowed from the current status.
    ///
    /// # Fields
    /// - Current reservation status
    /// - Requested reservation status
    #[error("Cannot move reservation from {0:?} to {1:?}")]
    InvalidTransition(ReservationStatus, ReservationStatus),

    /// Confirmation number generation collided on every bounded attempt and
    /// the long fallback collided too. Practically unreachable.
    #[error("Could not generate a unique confirmation number")]
    ConfirmationNumbersExhausted,
}

/// Converts booking errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `InvalidDateRange`, `OccupancyExceeded`
/// - 409 Conflict - `RoomUnavailable`, `DuplicateRoomNumber`, `InvalidTransition`,
///   `ConfirmationNumbersExhausted`
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidDateRange | Self::OccupancyExceeded(_, _) => StatusCode::BAD_REQUEST,
            Self::RoomUnavailable(_, _, _)
            | Self::DuplicateRoomNumber(_)
            | Self::InvalidTransition(_, _)
            | Self::ConfirmationNumbersExhausted => StatusCode::CONFLICT,
        };

        let message = match &self {
            Self::RoomUnavailable(_, check_in, check_out) => format!(
                "Room is already booked from {} to {}",
                check_in.format("%Y-%m-%d"),
                check_out.format("%Y-%m-%d")
            ),
            err => err.to_string(),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
