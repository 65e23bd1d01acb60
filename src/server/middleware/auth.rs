use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Access requirement checked by [`AuthGuard::require`].
pub enum Permission {
    /// Staff-level access: satisfied by staff and admin accounts.
    Staff,
    /// Admin-only access.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks the given permissions.
    ///
    /// With an empty permission slice this only asserts that a logged-in,
    /// active account backs the session. Deactivated accounts are rejected
    /// even when their session is still alive.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated account
    /// - `Err(AppError)` - Not logged in, account missing/disabled, or
    ///   insufficient role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.active {
            return Err(AuthError::AccountDisabled(user_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Staff => {
                    if !user.role.is_elevated() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Staff role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Admin => {
                    if user.role != entity::user::UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Admin role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
