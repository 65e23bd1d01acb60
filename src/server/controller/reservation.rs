use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::reservation::{CreateReservationDto, UpdateReservationDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{billing::BillingService, reservation::ReservationService},
        state::AppState,
    },
};

/// Query parameters for the reservation list.
#[derive(Deserialize)]
pub struct ReservationListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_per_page")]
    pub per_page: u64,
    pub room_id: Option<i32>,
}

/// POST /api/reservations
/// Books a room. Guests book for themselves; staff may book for any guest.
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db, &state.booking_locks, &state.mailer)
        .create(&user, dto)
        .await?;

    tracing::info!(
        reservation_id = reservation.id,
        confirmation_number = %reservation.confirmation_number,
        "Reservation created"
    );

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/reservations
/// Lists reservations. Staff see all; guests see their own.
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReservationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = ReservationService::new(&state.db, &state.booking_locks, &state.mailer)
        .get_paginated(&user, query.room_id, query.page, query.per_page)
        .await?;

    Ok(Json(reservations))
}

/// GET /api/reservations/{id}
/// Gets a reservation. Owner or staff.
pub async fn get_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db, &state.booking_locks, &state.mailer)
        .get_by_id(&user, id)
        .await?;

    Ok(Json(reservation))
}

/// PUT /api/reservations/{id}
/// Changes a reservation's status. Guests may only cancel their own.
pub async fn update_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db, &state.booking_locks, &state.mailer)
        .update_status(&user, id, dto)
        .await?;

    Ok(Json(reservation))
}

/// POST /api/reservations/{id}/check-in
/// Checks a guest in. Staff only.
pub async fn check_in(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let reservation = ReservationService::new(&state.db, &state.booking_locks, &state.mailer)
        .check_in(id)
        .await?;

    tracing::info!(reservation_id = reservation.id, "Guest checked in");

    Ok(Json(reservation))
}

/// POST /api/reservations/{id}/check-out
/// Checks a guest out. Staff only.
pub async fn check_out(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let reservation = ReservationService::new(&state.db, &state.booking_locks, &state.mailer)
        .check_out(id)
        .await?;

    tracing::info!(reservation_id = reservation.id, "Guest checked out");

    Ok(Json(reservation))
}

/// GET /api/reservations/{id}/bill
/// Gets the bill attached to a reservation. Owner or staff.
pub async fn get_reservation_bill(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bill = BillingService::new(&state.db, &state.mailer)
        .get_by_reservation(&user, id)
        .await?;

    Ok(Json(bill))
}
