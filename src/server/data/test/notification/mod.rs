use crate::server::{data::notification::NotificationRepository, model::notification::NotifyParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated_for_user;

/// Helper for notification params addressed to one account.
fn params_for(user_id: i32, title: &str) -> NotifyParams {
    NotifyParams {
        user_id,
        kind: "booking_confirmed".to_string(),
        title: title.to_string(),
        body: "Your booking is confirmed.".to_string(),
        related_type: Some("reservation".to_string()),
        related_id: Some(1),
    }
}
