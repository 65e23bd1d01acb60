use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is stored in the session.
    ///
    /// The request reached a protected endpoint without a login. Results in a
    /// 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// The account was removed after the session was issued. Results in a
    /// 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Login failed because the email is unknown or the password is wrong.
    ///
    /// Both cases map to the same message so that account existence is not
    /// leaked. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account exists but has been deactivated.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account for user {0} is deactivated")]
    AccountDisabled(i32),

    /// The authenticated user lacks the permission required for the action.
    ///
    /// # Fields
    /// - User id of the denied account
    /// - Server-side description of the denied action
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Session and credential failures return 401 Unauthorized; permission and
/// deactivation failures return 403 Forbidden. Detailed denial reasons are kept
/// server-side; clients receive short generic messages.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccountDisabled(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Account is deactivated".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
