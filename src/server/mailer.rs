//! Outbound email delivery.
//!
//! Wraps an SMTP transport behind a cheap-to-clone handle held in application
//! state. When no SMTP relay is configured the mailer runs in log-only mode:
//! sends succeed without leaving the process, so booking flows behave the
//! same in development and in tests.

use lettre::{
    message::Mailbox,
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};

use crate::server::{config::MailConfig, error::AppError};

/// Handle for sending transactional email.
#[derive(Clone)]
pub struct Mailer {
    transport: Option<SmtpTransport>,
    from: Option<Mailbox>,
}

impl Mailer {
    /// Builds a mailer from the optional SMTP configuration.
    ///
    /// # Returns
    /// - `Ok(Mailer)` - Relay-backed mailer, or a log-only mailer when no
    ///   configuration is present
    /// - `Err(AppError)` - Malformed relay host or sender address
    pub fn from_config(config: &Option<MailConfig>) -> Result<Self, AppError> {
        let Some(config) = config else {
            tracing::info!("No SMTP relay configured, email delivery is log-only");
            return Ok(Self {
                transport: None,
                from: None,
            });
        };

        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| AppError::InternalError(format!("Invalid SMTP sender address: {}", e)))?;

        let transport = SmtpTransport::relay(&config.host)
            .map_err(|e| AppError::InternalError(format!("Invalid SMTP relay host: {}", e)))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport: Some(transport),
            from: Some(from),
        })
    }

    /// Sends a plain-text email.
    ///
    /// The SMTP transport is blocking, so the send runs on the blocking
    /// thread pool. In log-only mode the message is traced and dropped.
    ///
    /// # Arguments
    /// - `to` - Recipient address
    /// - `subject` - Message subject
    /// - `body` - Plain-text message body
    ///
    /// # Returns
    /// - `Ok(())` - Message accepted by the relay (or logged)
    /// - `Err(AppError)` - Bad recipient address or relay failure
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AppError> {
        let (Some(transport), Some(from)) = (self.transport.clone(), self.from.clone()) else {
            tracing::info!(recipient = to, subject, "Skipping email, delivery is log-only");
            return Ok(());
        };

        let message = Message::builder()
            .from(from)
            .to(to
                .parse()
                .map_err(|e| AppError::BadRequest(format!("Invalid recipient address: {}", e)))?)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| AppError::InternalError(format!("Failed to build email: {}", e)))?;

        tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| AppError::InternalError(format!("Email send task failed: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}
