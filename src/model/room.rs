use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateRoomDto {
    pub room_number: String,
    /// One of "single", "double", "suite", "deluxe", "presidential".
    pub room_type: String,
    pub floor: i32,
    pub price_per_night: f64,
    pub max_occupancy: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct UpdateRoomDto {
    pub room_type: Option<String>,
    pub floor: Option<i32>,
    pub price_per_night: Option<f64>,
    pub max_occupancy: Option<i32>,
    /// One of "available", "occupied", "cleaning", "maintenance", "reserved".
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    pub room_type: String,
    pub floor: i32,
    pub price_per_night: f64,
    pub max_occupancy: i32,
    pub status: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaginatedRoomsDto {
    pub rooms: Vec<RoomDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Rooms free for a requested date range, after subtracting rooms with a
/// conflicting confirmed or checked-in reservation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AvailabilityDto {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub check_in: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub check_out: DateTime<Utc>,
    pub rooms: Vec<RoomDto>,
}
