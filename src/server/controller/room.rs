use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::room::{CreateRoomDto, UpdateRoomDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room::RoomSearchCriteria,
        service::{reservation::ReservationService, room::RoomService},
        state::AppState,
    },
};

/// Query parameters for the room list.
#[derive(Deserialize)]
pub struct RoomListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_per_page")]
    pub per_page: u64,
    pub room_type: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for the availability search.
#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: String,
    pub check_out: String,
    pub room_type: Option<String>,
    pub min_occupancy: Option<i32>,
}

/// POST /api/rooms
/// Registers a new room. Staff only.
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let room = RoomService::new(&state.db).create(dto).await?;

    tracing::info!(room_id = room.id, room_number = %room.room_number, "Room registered");

    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /api/rooms
/// Lists rooms with optional type and status filters. Staff only.
pub async fn get_rooms(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RoomListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let rooms = RoomService::new(&state.db)
        .get_paginated(
            query.page,
            query.per_page,
            query.room_type.as_deref(),
            query.status.as_deref(),
        )
        .await?;

    Ok(Json(rooms))
}

/// GET /api/rooms/availability
/// Finds rooms free for a date range. Any authenticated user.
pub async fn get_availability(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let criteria = RoomSearchCriteria {
        room_type: query
            .room_type
            .as_deref()
            .map(RoomService::parse_room_type)
            .transpose()?,
        min_occupancy: query.min_occupancy,
    };

    let availability = ReservationService::new(&state.db, &state.booking_locks, &state.mailer)
        .check_availability(&query.check_in, &query.check_out, criteria)
        .await?;

    Ok(Json(availability))
}

/// GET /api/rooms/{id}
/// Gets a room by id. Staff only.
pub async fn get_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let room = RoomService::new(&state.db).get_by_id(id).await?;

    Ok(Json(room))
}

/// PUT /api/rooms/{id}
/// Updates a room's mutable fields. Staff only.
pub async fn update_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let room = RoomService::new(&state.db).update(id, dto).await?;

    Ok(Json(room))
}
