use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SettingsDto {
    pub notifications_enabled: bool,
    pub notify_on_booking: bool,
    pub default_tax_rate: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateSettingsDto {
    pub notifications_enabled: Option<bool>,
    pub notify_on_booking: Option<bool>,
    pub default_tax_rate: Option<f64>,
}
