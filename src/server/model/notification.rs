//! Domain models for in-app notifications.

use chrono::{DateTime, Utc};

/// An in-app notification delivered to one account.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    /// Machine-readable category, e.g. "booking_confirmed" or "check_in".
    pub kind: String,
    pub title: String,
    pub body: String,
    /// Entity type this notification points at ("reservation", "billing").
    pub related_type: Option<String>,
    pub related_id: Option<i32>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Converts an entity model to a notification domain model at the repository boundary.
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            title: entity.title,
            body: entity.body,
            related_type: entity.related_type,
            related_id: entity.related_id,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a notification.
#[derive(Debug, Clone)]
pub struct NotifyParams {
    pub user_id: i32,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub related_type: Option<String>,
    pub related_id: Option<i32>,
}
