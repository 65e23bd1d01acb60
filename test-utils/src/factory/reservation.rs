//! Reservation factory for creating test reservation entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::reservation::{BookingSource, ReservationStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// The guest and room must already exist; their ids are required. Defaults
/// make a two-night confirmed stay starting tomorrow.
///
/// # Example
///
/// ```rust,ignore
/// use entity::reservation::ReservationStatus;
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let cancelled = ReservationFactory::new(&db, guest.id, room.id)
///     .status(ReservationStatus::Cancelled)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    guest_id: i32,
    room_id: i32,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    guest_count: i32,
    status: ReservationStatus,
    total_amount: f64,
    confirmation_number: String,
    source: BookingSource,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - check_in: tomorrow, check_out: three days from now (two nights)
    /// - guest_count: `2`
    /// - status: `ReservationStatus::Confirmed`
    /// - total_amount: `200.0`
    /// - confirmation_number: `"LUXTEST{id}"` where id is auto-incremented
    /// - source: `BookingSource::Website`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guest_id` - Id of an existing account
    /// - `room_id` - Id of an existing room
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guest_id: i32, room_id: i32) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            guest_id,
            room_id,
            check_in: now + Duration::days(1),
            check_out: now + Duration::days(3),
            guest_count: 2,
            status: ReservationStatus::Confirmed,
            total_amount: 200.0,
            confirmation_number: format!("LUXTEST{}", id),
            source: BookingSource::Website,
        }
    }

    /// Sets the check-in timestamp.
    pub fn check_in(mut self, check_in: DateTime<Utc>) -> Self {
        self.check_in = check_in;
        self
    }

    /// Sets the check-out timestamp.
    pub fn check_out(mut self, check_out: DateTime<Utc>) -> Self {
        self.check_out = check_out;
        self
    }

    /// Sets the guest count.
    pub fn guest_count(mut self, guest_count: i32) -> Self {
        self.guest_count = guest_count;
        self
    }

    /// Sets the reservation status.
    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the frozen total amount.
    pub fn total_amount(mut self, total_amount: f64) -> Self {
        self.total_amount = total_amount;
        self
    }

    /// Sets the confirmation number.
    pub fn confirmation_number(mut self, confirmation_number: impl Into<String>) -> Self {
        self.confirmation_number = confirmation_number.into();
        self
    }

    /// Sets the booking source.
    pub fn source(mut self, source: BookingSource) -> Self {
        self.source = source;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        entity::reservation::ActiveModel {
            guest_id: ActiveValue::Set(self.guest_id),
            room_id: ActiveValue::Set(self.room_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            guest_count: ActiveValue::Set(self.guest_count),
            status: ActiveValue::Set(self.status),
            total_amount: ActiveValue::Set(self.total_amount),
            confirmation_number: ActiveValue::Set(self.confirmation_number),
            source: ActiveValue::Set(self.source),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed two-night reservation with default values.
///
/// Shorthand for `ReservationFactory::new(db, guest_id, room_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `guest_id` - Id of an existing account
/// - `room_id` - Id of an existing room
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reservation(
    db: &DatabaseConnection,
    guest_id: i32,
    room_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, guest_id, room_id).build().await
}
