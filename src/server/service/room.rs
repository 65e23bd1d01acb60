use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::room::{CreateRoomDto, PaginatedRoomsDto, RoomDto, UpdateRoomDto},
    server::{
        data::room::RoomRepository,
        error::{booking::BookingError, AppError},
        model::room::{CreateRoomParams, Room, UpdateRoomParams},
    },
};

/// Service for managing the room inventory.
pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    /// Creates a new RoomService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new room.
    ///
    /// Room numbers are unique; registering a number that is already in use
    /// is a conflict. New rooms start with status `available`.
    ///
    /// # Arguments
    /// - `dto` - Room creation data
    ///
    /// # Returns
    /// - `Ok(RoomDto)` - The registered room
    /// - `Err(AppError)` - Validation failure, duplicate room number, or database error
    pub async fn create(&self, dto: CreateRoomDto) -> Result<RoomDto, AppError> {
        let repo = RoomRepository::new(self.db);

        let room_number = dto.room_number.trim().to_string();
        if room_number.is_empty() {
            return Err(AppError::BadRequest(
                "Room number must not be empty".to_string(),
            ));
        }
        if dto.price_per_night < 0.0 {
            return Err(AppError::BadRequest(
                "Nightly price must not be negative".to_string(),
            ));
        }
        if dto.max_occupancy < 1 {
            return Err(AppError::BadRequest(
                "Maximum occupancy must be at least 1".to_string(),
            ));
        }

        let room_type = Self::parse_room_type(&dto.room_type)?;

        if repo.get_by_room_number(&room_number).await?.is_some() {
            return Err(BookingError::DuplicateRoomNumber(room_number).into());
        }

        let room = repo
            .create(CreateRoomParams {
                room_number,
                room_type,
                floor: dto.floor,
                price_per_night: dto.price_per_night,
                max_occupancy: dto.max_occupancy,
            })
            .await?;

        Ok(Self::to_dto(&room))
    }

    /// Gets a room by id.
    ///
    /// # Returns
    /// - `Ok(RoomDto)` - The room
    /// - `Err(AppError)` - Room not found or database error
    pub async fn get_by_id(&self, id: i32) -> Result<RoomDto, AppError> {
        let repo = RoomRepository::new(self.db);

        let room = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        Ok(Self::to_dto(&room))
    }

    /// Gets paginated rooms ordered by room number.
    ///
    /// # Arguments
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    /// - `room_type` - Optional room type filter string
    /// - `status` - Optional room status filter string
    ///
    /// # Returns
    /// - `Ok(PaginatedRoomsDto)` - Page of rooms with pagination metadata
    /// - `Err(AppError)` - Unknown filter value or database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        room_type: Option<&str>,
        status: Option<&str>,
    ) -> Result<PaginatedRoomsDto, AppError> {
        let repo = RoomRepository::new(self.db);

        let room_type = room_type.map(Self::parse_room_type).transpose()?;
        let status = status.map(Self::parse_status).transpose()?;

        let (rooms, total) = repo.get_paginated(page, per_page, room_type, status).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedRoomsDto {
            rooms: rooms.iter().map(Self::to_dto).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates a room's mutable fields.
    ///
    /// Only fields present in the DTO are changed. The room number is fixed
    /// after registration.
    ///
    /// # Returns
    /// - `Ok(RoomDto)` - The updated room
    /// - `Err(AppError)` - Room not found, validation failure, or database error
    pub async fn update(&self, id: i32, dto: UpdateRoomDto) -> Result<RoomDto, AppError> {
        let repo = RoomRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Room not found".to_string()));
        }

        if let Some(price) = dto.price_per_night {
            if price < 0.0 {
                return Err(AppError::BadRequest(
                    "Nightly price must not be negative".to_string(),
                ));
            }
        }
        if let Some(occupancy) = dto.max_occupancy {
            if occupancy < 1 {
                return Err(AppError::BadRequest(
                    "Maximum occupancy must be at least 1".to_string(),
                ));
            }
        }

        let room_type = dto
            .room_type
            .as_deref()
            .map(Self::parse_room_type)
            .transpose()?;
        let status = dto.status.as_deref().map(Self::parse_status).transpose()?;

        let room = repo
            .update(
                id,
                UpdateRoomParams {
                    room_type,
                    floor: dto.floor,
                    price_per_night: dto.price_per_night,
                    max_occupancy: dto.max_occupancy,
                    status,
                },
            )
            .await?;

        Ok(Self::to_dto(&room))
    }

    /// Parses a room type string from a DTO.
    pub fn parse_room_type(raw: &str) -> Result<entity::room::RoomType, AppError> {
        entity::room::RoomType::try_from_value(&raw.to_string())
            .map_err(|_| AppError::BadRequest(format!("Unknown room type '{}'", raw)))
    }

    /// Parses a room status string from a DTO.
    pub fn parse_status(raw: &str) -> Result<entity::room::RoomStatus, AppError> {
        entity::room::RoomStatus::try_from_value(&raw.to_string())
            .map_err(|_| AppError::BadRequest(format!("Unknown room status '{}'", raw)))
    }

    /// Converts a room domain model into its public DTO.
    pub fn to_dto(room: &Room) -> RoomDto {
        RoomDto {
            id: room.id,
            room_number: room.room_number.clone(),
            room_type: room.room_type.to_value(),
            floor: room.floor,
            price_per_night: room.price_per_night,
            max_occupancy: room.max_occupancy,
            status: room.status.to_value(),
            created_at: room.created_at,
        }
    }
}
