//! Reservation ledger repository.
//!
//! Database operations for reservations: creation, lookups, pagination,
//! status transitions and the conflict query that backs double-booking
//! prevention. A reservation blocks its room for the half-open interval
//! `[check_in, check_out)` while its status is `confirmed` or `checked-in`.

use chrono::{DateTime, Utc};
use entity::reservation::ReservationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::reservation::{
    CreateReservationParams, GetPaginatedReservationsParams, Reservation,
};

/// Repository providing database operations for the reservation ledger.
pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    /// Creates a new ReservationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a new reservation.
    ///
    /// The service layer has already validated the date range and occupancy,
    /// run the conflict check under the room's booking lock, computed the
    /// frozen total and generated the confirmation number.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let now = Utc::now();
        let entity = entity::reservation::ActiveModel {
            guest_id: ActiveValue::Set(params.guest_id),
            room_id: ActiveValue::Set(params.room_id),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            guest_count: ActiveValue::Set(params.guest_count),
            status: ActiveValue::Set(params.status),
            total_amount: ActiveValue::Set(params.total_amount),
            confirmation_number: ActiveValue::Set(params.confirmation_number),
            source: ActiveValue::Set(params.source),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Gets a reservation by id.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The reservation
    /// - `Ok(None)` - No reservation with this id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Gets a reservation by its confirmation number.
    ///
    /// Also used during confirmation number generation to test candidate
    /// numbers for uniqueness.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The reservation
    /// - `Ok(None)` - No reservation with this confirmation number
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_confirmation_number(
        &self,
        confirmation_number: &str,
    ) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ConfirmationNumber.eq(confirmation_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Gets paginated reservations, newest first.
    ///
    /// Optional guest and room filters narrow the page; guests only ever see
    /// their own reservations via the guest filter.
    ///
    /// # Returns
    /// - `Ok((reservations, total))` - Page of reservations and total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        params: GetPaginatedReservationsParams,
    ) -> Result<(Vec<Reservation>, u64), DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if let Some(guest_id) = params.guest_id {
            query = query.filter(entity::reservation::Column::GuestId.eq(guest_id));
        }
        if let Some(room_id) = params.room_id {
            query = query.filter(entity::reservation::Column::RoomId.eq(room_id));
        }

        let paginator = query
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .paginate(self.db, params.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(params.page).await?;

        Ok((
            entities.into_iter().map(Reservation::from_entity).collect(),
            total,
        ))
    }

    /// Finds reservations on a room that overlap a half-open date range.
    ///
    /// Two stays conflict when `existing.check_in < check_out` and
    /// `existing.check_out > check_in`; back-to-back stays sharing a boundary
    /// date do not. Only reservations whose status blocks the room
    /// (`confirmed`, `checked-in`) count. Pending, cancelled and checked-out
    /// rows never conflict.
    ///
    /// # Arguments
    /// - `room_id` - Room under consideration
    /// - `check_in` - Start of the candidate range (inclusive)
    /// - `check_out` - End of the candidate range (exclusive)
    /// - `exclude_id` - Reservation to ignore, for re-activation checks
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - All conflicting reservations
    /// - `Err(DbErr)` - Database error
    pub async fn find_conflicting(
        &self,
        room_id: i32,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
        exclude_id: Option<i32>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(
                entity::reservation::Column::Status
                    .is_in([ReservationStatus::Confirmed, ReservationStatus::CheckedIn]),
            )
            .filter(entity::reservation::Column::CheckIn.lt(check_out))
            .filter(entity::reservation::Column::CheckOut.gt(check_in));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(exclude_id));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Finds ids of all rooms blocked for a half-open date range.
    ///
    /// A room is blocked when any `confirmed` or `checked-in` reservation on
    /// it overlaps the range. Used by the availability query to subtract
    /// booked rooms in one pass instead of querying per room.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Room ids with at least one conflicting reservation
    /// - `Err(DbErr)` - Database error
    pub async fn find_blocked_room_ids(
        &self,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(
                entity::reservation::Column::Status
                    .is_in([ReservationStatus::Confirmed, ReservationStatus::CheckedIn]),
            )
            .filter(entity::reservation::Column::CheckIn.lt(check_out))
            .filter(entity::reservation::Column::CheckOut.gt(check_in))
            .all(self.db)
            .await?;

        let mut room_ids: Vec<i32> = entities.into_iter().map(|r| r.room_id).collect();
        room_ids.sort_unstable();
        room_ids.dedup();

        Ok(room_ids)
    }

    /// Sets a reservation's status and bumps `updated_at`.
    ///
    /// Transition legality is enforced in the service layer before this runs.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(DbErr)` - Reservation not found or database error
    pub async fn set_status(
        &self,
        id: i32,
        status: ReservationStatus,
    ) -> Result<Reservation, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found",
                id
            )))?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Reservation::from_entity(updated))
    }
}
