//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::room::{RoomStatus, RoomType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity::room::RoomType;
/// use test_utils::factory::room::RoomFactory;
///
/// let suite = RoomFactory::new(&db)
///     .room_type(RoomType::Suite)
///     .price_per_night(320.0)
///     .max_occupancy(4)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: String,
    room_type: RoomType,
    floor: i32,
    price_per_night: f64,
    max_occupancy: i32,
    status: RoomStatus,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: `"{id}"` where id is auto-incremented
    /// - room_type: `RoomType::Double`
    /// - floor: `1`
    /// - price_per_night: `100.0`
    /// - max_occupancy: `2`
    /// - status: `RoomStatus::Available`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RoomFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            room_number: format!("{}", 100 + id),
            room_type: RoomType::Double,
            floor: 1,
            price_per_night: 100.0,
            max_occupancy: 2,
            status: RoomStatus::Available,
        }
    }

    /// Sets the room number.
    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    /// Sets the room type.
    pub fn room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    /// Sets the floor.
    pub fn floor(mut self, floor: i32) -> Self {
        self.floor = floor;
        self
    }

    /// Sets the nightly price.
    pub fn price_per_night(mut self, price_per_night: f64) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    /// Sets the maximum occupancy.
    pub fn max_occupancy(mut self, max_occupancy: i32) -> Self {
        self.max_occupancy = max_occupancy;
        self
    }

    /// Sets the operational status.
    pub fn status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            room_type: ActiveValue::Set(self.room_type),
            floor: ActiveValue::Set(self.floor),
            price_per_night: ActiveValue::Set(self.price_per_night),
            max_occupancy: ActiveValue::Set(self.max_occupancy),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
///
/// Shorthand for `RoomFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::room::Model)` - Created room entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
