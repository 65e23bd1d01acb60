//! Room registry repository.
//!
//! Database operations for the room inventory: registration, lookups, status
//! transitions and the static half of the availability query (filtering rooms
//! by type, capacity and `available` status).

use chrono::Utc;
use entity::room::RoomStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room::{CreateRoomParams, Room, RoomSearchCriteria, UpdateRoomParams};

/// Repository providing database operations for the room registry.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    /// Creates a new RoomRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new room with status `available`.
    ///
    /// The service layer checks the room number for uniqueness first; a race
    /// on the unique index still surfaces as a database constraint error.
    ///
    /// # Arguments
    /// - `params` - Room number, type, floor, nightly price and capacity
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            room_number: ActiveValue::Set(params.room_number),
            room_type: ActiveValue::Set(params.room_type),
            floor: ActiveValue::Set(params.floor),
            price_per_night: ActiveValue::Set(params.price_per_night),
            max_occupancy: ActiveValue::Set(params.max_occupancy),
            status: ActiveValue::Set(RoomStatus::Available),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    /// Gets a room by id.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - The room
    /// - `Ok(None)` - No room with this id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Gets a room by its human-facing room number.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - The room
    /// - `Ok(None)` - No room with this number
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_room_number(&self, room_number: &str) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomNumber.eq(room_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Gets paginated rooms ordered by room number.
    ///
    /// # Arguments
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    /// - `room_type` - Optional room type filter
    /// - `status` - Optional room status filter
    ///
    /// # Returns
    /// - `Ok((rooms, total))` - Page of rooms and total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        room_type: Option<entity::room::RoomType>,
        status: Option<RoomStatus>,
    ) -> Result<(Vec<Room>, u64), DbErr> {
        let mut query = entity::prelude::Room::find();

        if let Some(room_type) = room_type {
            query = query.filter(entity::room::Column::RoomType.eq(room_type));
        }
        if let Some(status) = status {
            query = query.filter(entity::room::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_asc(entity::room::Column::RoomNumber)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Room::from_entity).collect(), total))
    }

    /// Finds rooms matching the static availability filters.
    ///
    /// Returns rooms with status `available` that satisfy the optional type
    /// and minimum-occupancy criteria. This is the first pass of the
    /// availability query; subtracting rooms with conflicting reservations
    /// happens in the service layer.
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Matching rooms ordered by room number
    /// - `Err(DbErr)` - Database error
    pub async fn find_available(&self, criteria: &RoomSearchCriteria) -> Result<Vec<Room>, DbErr> {
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::Status.eq(RoomStatus::Available));

        if let Some(room_type) = &criteria.room_type {
            query = query.filter(entity::room::Column::RoomType.eq(room_type.clone()));
        }
        if let Some(min_occupancy) = criteria.min_occupancy {
            query = query.filter(entity::room::Column::MaxOccupancy.gte(min_occupancy));
        }

        let entities = query
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Sets a room's operational status.
    ///
    /// Last write wins; booking, check-in and check-out flows all go through
    /// this method.
    ///
    /// # Returns
    /// - `Ok(())` - Status updated (or no matching room found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, room_id: i32, status: RoomStatus) -> Result<(), DbErr> {
        entity::prelude::Room::update_many()
            .filter(entity::room::Column::Id.eq(room_id))
            .col_expr(
                entity::room::Column::Status,
                sea_orm::sea_query::Expr::value(status),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Updates a room's mutable fields.
    ///
    /// Only fields present in `params` are changed.
    ///
    /// # Returns
    /// - `Ok(Room)` - The updated room
    /// - `Err(DbErr)` - Room not found or database error
    pub async fn update(&self, id: i32, params: UpdateRoomParams) -> Result<Room, DbErr> {
        let room = entity::prelude::Room::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Room {} not found", id)))?;

        let mut active_model: entity::room::ActiveModel = room.into();

        if let Some(room_type) = params.room_type {
            active_model.room_type = ActiveValue::Set(room_type);
        }
        if let Some(floor) = params.floor {
            active_model.floor = ActiveValue::Set(floor);
        }
        if let Some(price_per_night) = params.price_per_night {
            active_model.price_per_night = ActiveValue::Set(price_per_night);
        }
        if let Some(max_occupancy) = params.max_occupancy {
            active_model.max_occupancy = ActiveValue::Set(max_occupancy);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Room::from_entity(updated))
    }
}
