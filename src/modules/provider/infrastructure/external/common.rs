use reqwest::StatusCode;
use std::time::Duration;

use crate::shared::domain::value_objects::MovieProvider;
use crate::shared::errors::{AppError, AppResult};

pub const USER_AGENT: &str = "Movie-Compare/1.0";

/// Common HTTP response handling for both movie providers
pub struct CommonHttpHandler;

impl CommonHttpHandler {
    /// Any non-success status becomes `Upstream` carrying the code
    pub fn handle_response_status(status: StatusCode, provider: MovieProvider) -> AppResult<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(AppError::Upstream {
                provider,
                status: status.as_u16(),
            })
        }
    }

    pub fn create_http_client(timeout: Duration, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))
    }

    /// Network level failures: connect, timeout and body read errors
    pub fn transport_error(provider: MovieProvider, error: reqwest::Error) -> AppError {
        let message = if error.is_timeout() {
            format!("request timed out: {}", error)
        } else {
            error.to_string()
        };
        AppError::Transport { provider, message }
    }
}
