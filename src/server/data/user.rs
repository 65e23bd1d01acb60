//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing accounts in the database.
//! It handles account creation, lookups by id and email, and role queries with
//! conversion between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for account management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account.
    ///
    /// The caller is responsible for checking email uniqueness beforehand;
    /// a duplicate email surfaces as a database constraint error.
    ///
    /// # Arguments
    /// - `params` - Account fields with a pre-hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Gets an account by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The account
    /// - `Ok(None)` - No account with this id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets an account by login email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The account
    /// - `Ok(None)` - No account with this email
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all active accounts with an elevated role (staff and admin).
    ///
    /// Used to resolve recipients for operational notifications such as new
    /// bookings and check-ins.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All active staff and admin accounts
    /// - `Err(DbErr)` - Database error
    pub async fn get_elevated(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(
                entity::user::Column::Role.is_in([UserRole::Staff, UserRole::Admin]),
            )
            .filter(entity::user::Column::Active.eq(true))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Counts accounts with the admin role.
    ///
    /// Used by the startup admin seed to decide whether a bootstrap admin
    /// account is needed.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of admin accounts
    /// - `Err(DbErr)` - Database error
    pub async fn count_admins(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin))
            .count(self.db)
            .await
    }
}
