//! Domain models for room inventory.

use chrono::{DateTime, Utc};
use entity::room::{RoomStatus, RoomType};

/// A physical room in the hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Unique identifier for the room.
    pub id: i32,
    /// Human-facing room number, unique across the hotel.
    pub room_number: String,
    /// Category of the room.
    pub room_type: RoomType,
    /// Floor the room is on.
    pub floor: i32,
    /// Nightly price used to derive reservation totals.
    pub price_per_night: f64,
    /// Maximum number of guests the room can hold.
    pub max_occupancy: i32,
    /// Current operational status.
    pub status: RoomStatus,
    /// Timestamp when the room was registered.
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Converts an entity model to a room domain model at the repository boundary.
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            room_number: entity.room_number,
            room_type: entity.room_type,
            floor: entity.floor,
            price_per_night: entity.price_per_night,
            max_occupancy: entity.max_occupancy,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new room.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub room_number: String,
    pub room_type: RoomType,
    pub floor: i32,
    pub price_per_night: f64,
    pub max_occupancy: i32,
}

/// Parameters for updating a room. Only provided fields are changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParams {
    pub room_type: Option<RoomType>,
    pub floor: Option<i32>,
    pub price_per_night: Option<f64>,
    pub max_occupancy: Option<i32>,
    pub status: Option<RoomStatus>,
}

/// Static filters applied when searching for bookable rooms.
///
/// These are the first pass of the availability query; the dynamic
/// reservation-overlap subtraction happens afterwards in the service layer.
#[derive(Debug, Clone, Default)]
pub struct RoomSearchCriteria {
    pub room_type: Option<RoomType>,
    pub min_occupancy: Option<i32>,
}
