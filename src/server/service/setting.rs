use sea_orm::DatabaseConnection;

use crate::{
    model::setting::{SettingsDto, UpdateSettingsDto},
    server::{
        data::setting::SettingRepository,
        error::AppError,
        model::setting::{HotelSettings, UpdateSettingsParams},
    },
};

/// Service for hotel-wide settings.
pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    /// Creates a new SettingService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the current settings, with defaults when none are stored.
    ///
    /// # Returns
    /// - `Ok(SettingsDto)` - The current settings
    /// - `Err(AppError)` - Database error
    pub async fn get(&self) -> Result<SettingsDto, AppError> {
        let settings = SettingRepository::new(self.db).get().await?;

        Ok(Self::to_dto(&settings))
    }

    /// Applies a partial settings update.
    ///
    /// Omitted fields keep their current value. The tax rate is advisory and
    /// must not be negative.
    ///
    /// # Returns
    /// - `Ok(SettingsDto)` - Settings after the update
    /// - `Err(AppError)` - Validation failure or database error
    pub async fn update(&self, dto: UpdateSettingsDto) -> Result<SettingsDto, AppError> {
        if let Some(rate) = dto.default_tax_rate {
            if rate < 0.0 {
                return Err(AppError::BadRequest(
                    "Tax rate must not be negative".to_string(),
                ));
            }
        }

        let settings = SettingRepository::new(self.db)
            .update(UpdateSettingsParams {
                notifications_enabled: dto.notifications_enabled,
                notify_on_booking: dto.notify_on_booking,
                default_tax_rate: dto.default_tax_rate,
            })
            .await?;

        Ok(Self::to_dto(&settings))
    }

    /// Converts the settings domain model into its public DTO.
    fn to_dto(settings: &HotelSettings) -> SettingsDto {
        SettingsDto {
            notifications_enabled: settings.notifications_enabled,
            notify_on_booking: settings.notify_on_booking,
            default_tax_rate: settings.default_tax_rate,
        }
    }
}
