use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is missing or unreadable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
