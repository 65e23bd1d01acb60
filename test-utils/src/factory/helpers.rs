//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a reservation with its guest and room dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as the guest)
/// 2. Room
/// 3. Reservation linking the two
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((guest, room, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::room::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let guest = crate::factory::user::create_user(db).await?;
    let room = crate::factory::room::create_room(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, guest.id, room.id).await?;

    Ok((guest, room, reservation))
}

/// Creates a reservation with a room for a specific guest.
///
/// Useful when testing reservation operations for an account that already
/// exists, such as permission checks on a guest's own bookings.
///
/// # Arguments
/// - `db` - Database connection
/// - `guest` - Account to book the room for
///
/// # Returns
/// - `Ok((room, reservation))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_for_guest(
    db: &DatabaseConnection,
    guest: &entity::user::Model,
) -> Result<(entity::room::Model, entity::reservation::Model), DbErr> {
    let room = crate::factory::room::create_room(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, guest.id, room.id).await?;

    Ok((room, reservation))
}
