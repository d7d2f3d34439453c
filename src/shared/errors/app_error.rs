use serde::Serialize;
use thiserror::Error;

use crate::shared::domain::value_objects::MovieProvider;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "detail")]
pub enum AppError {
    #[error("Transport error talking to {provider}: {message}")]
    Transport {
        provider: MovieProvider,
        message: String,
    },

    #[error("{provider} responded with HTTP {status}")]
    Upstream { provider: MovieProvider, status: u16 },

    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        provider: MovieProvider,
        message: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Transient failures worth another attempt: network errors, 5xx and
    /// bodies that failed to decode. A 4xx means the request itself was bad.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Transport { .. } | AppError::MalformedResponse { .. } => true,
            AppError::Upstream { status, .. } => (500..=599).contains(status),
            AppError::InvalidArgument(_)
            | AppError::NotFound(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => false,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidArgument(_))
    }

    /// Status code the boundary should answer with
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
