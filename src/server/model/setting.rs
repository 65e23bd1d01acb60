//! Domain model for hotel-wide settings.

/// Settings read before emitting side effects. When no settings row exists
/// the defaults below apply.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelSettings {
    /// Master switch for all notification and email dispatch.
    pub notifications_enabled: bool,
    /// Whether new bookings trigger guest/staff notifications.
    pub notify_on_booking: bool,
    /// Advisory tax rate surfaced to billing clients; not enforced server-side.
    pub default_tax_rate: f64,
}

impl Default for HotelSettings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            notify_on_booking: true,
            default_tax_rate: 0.0,
        }
    }
}

impl HotelSettings {
    /// Converts an entity model to a settings domain model at the repository boundary.
    pub fn from_entity(entity: entity::setting::Model) -> Self {
        Self {
            notifications_enabled: entity.notifications_enabled,
            notify_on_booking: entity.notify_on_booking,
            default_tax_rate: entity.default_tax_rate,
        }
    }
}

/// Parameters for updating settings. Only provided fields are changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsParams {
    pub notifications_enabled: Option<bool>,
    pub notify_on_booking: Option<bool>,
    pub default_tax_rate: Option<f64>,
}
