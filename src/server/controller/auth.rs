use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, RegisterDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// POST /api/auth/register
/// Creates a guest account and logs it in.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).register(dto).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!(user_id = user.id, "Account registered");

    Ok((StatusCode::CREATED, Json(AuthService::to_dto(&user))))
}

/// POST /api/auth/login
/// Authenticates by email and password and establishes a session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).login(dto).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthService::to_dto(&user)))
}

/// GET /api/auth/logout
/// Destroys the current session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).logout().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user
/// Returns the account behind the current session.
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(Json(AuthService::to_dto(&user)))
}
