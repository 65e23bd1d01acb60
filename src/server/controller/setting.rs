use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::setting::UpdateSettingsDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::setting::SettingService,
        state::AppState,
    },
};

/// GET /api/settings
/// Gets the hotel-wide settings. Admin only.
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings = SettingService::new(&state.db).get().await?;

    Ok(Json(settings))
}

/// PUT /api/settings
/// Applies a partial settings update. Admin only.
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings = SettingService::new(&state.db).update(dto).await?;

    tracing::info!("Hotel settings updated");

    Ok(Json(settings))
}
