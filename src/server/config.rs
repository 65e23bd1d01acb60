use crate::server::error::{config::ConfigError, AppError};

/// Default bind address when none is configured.
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// SMTP relay configuration. All fields come as a group: setting `SMTP_HOST`
/// makes the remaining variables required.
pub struct MailConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Sender mailbox, e.g. "Hotel Desk <desk@example.com>".
    pub from: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Bootstrap admin credentials, used only when no admin account exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,

    /// Optional SMTP relay; without it email delivery is log-only.
    pub mail: Option<MailConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let mail = match std::env::var("SMTP_HOST") {
            Ok(host) => Some(MailConfig {
                host,
                username: std::env::var("SMTP_USERNAME")
                    .map_err(|_| ConfigError::MissingEnvVar("SMTP_USERNAME".to_string()))?,
                password: std::env::var("SMTP_PASSWORD")
                    .map_err(|_| ConfigError::MissingEnvVar("SMTP_PASSWORD".to_string()))?,
                from: std::env::var("SMTP_FROM")
                    .map_err(|_| ConfigError::MissingEnvVar("SMTP_FROM".to_string()))?,
            }),
            Err(_) => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
            mail,
        })
    }
}
