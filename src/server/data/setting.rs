//! Settings repository.
//!
//! Hotel-wide settings live in a single row with id 1. Reads fall back to
//! defaults when the row is absent; the first write creates it.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

use crate::server::model::setting::{HotelSettings, UpdateSettingsParams};

/// Fixed primary key of the settings singleton row.
const SETTINGS_ROW_ID: i32 = 1;

/// Repository providing database operations for hotel settings.
pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    /// Creates a new SettingRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the current settings, falling back to defaults when no row exists.
    ///
    /// # Returns
    /// - `Ok(HotelSettings)` - Stored settings or defaults
    /// - `Err(DbErr)` - Database error
    pub async fn get(&self) -> Result<HotelSettings, DbErr> {
        let entity = entity::prelude::Setting::find_by_id(SETTINGS_ROW_ID)
            .one(self.db)
            .await?;

        Ok(entity
            .map(HotelSettings::from_entity)
            .unwrap_or_default())
    }

    /// Applies a partial settings update, creating the singleton row if needed.
    ///
    /// Fields absent from `params` keep their current (or default) value.
    ///
    /// # Returns
    /// - `Ok(HotelSettings)` - Settings after the update
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: UpdateSettingsParams) -> Result<HotelSettings, DbErr> {
        let existing = entity::prelude::Setting::find_by_id(SETTINGS_ROW_ID)
            .one(self.db)
            .await?;

        let current = existing
            .clone()
            .map(HotelSettings::from_entity)
            .unwrap_or_default();

        let merged = HotelSettings {
            notifications_enabled: params
                .notifications_enabled
                .unwrap_or(current.notifications_enabled),
            notify_on_booking: params.notify_on_booking.unwrap_or(current.notify_on_booking),
            default_tax_rate: params.default_tax_rate.unwrap_or(current.default_tax_rate),
        };

        match existing {
            Some(entity) => {
                let mut active_model: entity::setting::ActiveModel = entity.into();
                active_model.notifications_enabled =
                    ActiveValue::Set(merged.notifications_enabled);
                active_model.notify_on_booking = ActiveValue::Set(merged.notify_on_booking);
                active_model.default_tax_rate = ActiveValue::Set(merged.default_tax_rate);
                active_model.update(self.db).await?;
            }
            None => {
                entity::setting::ActiveModel {
                    id: ActiveValue::Set(SETTINGS_ROW_ID),
                    notifications_enabled: ActiveValue::Set(merged.notifications_enabled),
                    notify_on_booking: ActiveValue::Set(merged.notify_on_booking),
                    default_tax_rate: ActiveValue::Set(merged.default_tax_rate),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(merged)
    }
}
