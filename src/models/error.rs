#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Message suitable for a user-facing banner. Server-provided and
    /// validation messages pass through verbatim; internal failures
    /// collapse to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg)
            | Self::ApiError(msg)
            | Self::AuthError(msg)
            | Self::NotFound(msg) => msg.clone(),
            Self::DataError(_) | Self::ConfigError(_) => "An error occurred".to_string(),
        }
    }
}
