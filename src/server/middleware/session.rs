//! Type-safe session management wrappers.
//!
//! This module provides a typed interface over the raw tower-sessions `Session`
//! so that session keys live in one place and handlers never pass string keys
//! around.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Session key holding the authenticated user's id.
const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state: storing and retrieving the authenticated
/// account id and tearing the session down on logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated account id in the session.
    ///
    /// # Arguments
    /// - `user_id` - Id of the account that just logged in
    ///
    /// # Returns
    /// - `Ok(())` - Id stored
    /// - `Err(AppError)` - Session store failure
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Reads the authenticated account id from the session, if any.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - A user is logged in
    /// - `Ok(None)` - No login on this session
    /// - `Err(AppError)` - Session store failure
    pub async fn user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Destroys the session, logging the user out.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
