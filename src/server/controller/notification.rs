use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::server::{
    controller::PaginationQuery, error::AppError, middleware::auth::AuthGuard,
    service::notification::NotificationService, state::AppState,
};

/// GET /api/notifications
/// Lists the current user's notifications, newest first.
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifications = NotificationService::new(&state.db, &state.mailer)
        .get_paginated(&user, query.page, query.per_page)
        .await?;

    Ok(Json(notifications))
}

/// PUT /api/notifications/{id}/read
/// Marks one of the current user's notifications as read.
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification = NotificationService::new(&state.db, &state.mailer)
        .mark_read(&user, id)
        .await?;

    Ok(Json(notification))
}
