use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateReservationDto {
    /// Guest the reservation is for. Staff may book on behalf of any guest;
    /// for self-service bookings this is omitted and the session user is used.
    pub guest_id: Option<i32>,
    pub room_id: i32,
    /// Format: "YYYY-MM-DD" or "YYYY-MM-DD HH:MM" in UTC.
    pub check_in: String,
    /// Format: "YYYY-MM-DD" or "YYYY-MM-DD HH:MM" in UTC. Exclusive.
    pub check_out: String,
    pub guest_count: i32,
    /// One of "website", "front_desk", "phone", "partner". Defaults to "website".
    pub source: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateReservationDto {
    /// Target status. Guests may only set "cancelled" on their own reservation.
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReservationDto {
    pub id: i32,
    pub guest_id: i32,
    pub guest_name: String,
    pub room_id: i32,
    pub room_number: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub check_in: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub check_out: DateTime<Utc>,
    pub guest_count: i32,
    pub status: String,
    pub total_amount: f64,
    pub confirmation_number: String,
    pub source: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReservationListItemDto {
    pub id: i32,
    pub guest_id: i32,
    pub room_id: i32,
    pub room_number: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub check_in: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub check_out: DateTime<Utc>,
    pub status: String,
    pub total_amount: f64,
    pub confirmation_number: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaginatedReservationsDto {
    pub reservations: Vec<ReservationListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
