//! Domain models for user accounts.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

/// A hotel account: guest, staff member, or admin.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the account.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Login email, unique across all accounts.
    pub email: String,
    /// Argon2 hash of the account password. Never leaves the server.
    pub password_hash: String,
    /// Access level of the account.
    pub role: UserRole,
    /// Deactivated accounts cannot log in.
    pub active: bool,
    /// Timestamp when the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: entity.role,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    /// Pre-hashed password (hashing happens in the auth service).
    pub password_hash: String,
    pub role: UserRole,
}
