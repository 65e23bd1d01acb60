//! Notification repository.
//!
//! Database operations for in-app notifications: creation by the dispatch
//! service, per-user listing and read-state updates.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{Notification, NotifyParams};

/// Repository providing database operations for notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    /// Creates a new NotificationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a new unread notification.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created notification
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: NotifyParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            kind: ActiveValue::Set(params.kind),
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            related_type: ActiveValue::Set(params.related_type),
            related_id: ActiveValue::Set(params.related_id),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets a page of a user's notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Account whose notifications to list
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// # Returns
    /// - `Ok((notifications, total))` - Page of notifications and total count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated_for_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), DbErr> {
        let paginator = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities
                .into_iter()
                .map(Notification::from_entity)
                .collect(),
            total,
        ))
    }

    /// Gets a notification by id.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The notification
    /// - `Ok(None)` - No notification with this id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Marks a notification as read.
    ///
    /// Idempotent; marking an already-read notification succeeds.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The updated notification
    /// - `Err(DbErr)` - Notification not found or database error
    pub async fn mark_read(&self, id: i32) -> Result<Notification, DbErr> {
        let notification = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Notification {} not found",
                id
            )))?;

        let mut active_model: entity::notification::ActiveModel = notification.into();
        active_model.read = ActiveValue::Set(true);

        let updated = active_model.update(self.db).await?;

        Ok(Notification::from_entity(updated))
    }
}
