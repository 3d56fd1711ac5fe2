use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    /// Message is shown inline to the user as-is.
    #[error("{0}")]
    AuthError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            AppError::from_status(status.as_u16(), err.to_string())
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

impl AppError {
    /// Map an HTTP status plus the provider's message onto the taxonomy.
    /// Client errors keep the provider's wording untouched.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            429 => AppError::RateLimitError(message),
            404 => AppError::NotFound(message),
            401 | 403 => AppError::Unauthorized(message),
            500..=599 => AppError::ExternalServiceError(format!("HTTP {}: {}", status, message)),
            _ => AppError::ApiError(message),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
