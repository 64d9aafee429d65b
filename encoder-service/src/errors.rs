//! Error types for the encoder service.

use std::process::ExitStatus;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised while reading the service configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Create an invalid value error.
    pub fn invalid(name: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidValue {
            name,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors that can occur while invoking the sidecar executable.
#[derive(Error, Debug)]
pub enum SidecarError {
    /// The executable could not be launched (missing, not executable, ...).
    #[error("Failed to spawn sidecar: {0}")]
    Spawn(#[source] std::io::Error),

    /// The sidecar ran but exited unsuccessfully.
    #[error("Sidecar exited with {0}")]
    Exit(ExitStatus),

    /// The sidecar did not finish within the deadline and was killed.
    #[error("Sidecar timed out after {0:?}")]
    Timeout(Duration),

    /// The sidecar wrote something that is not UTF-8.
    #[error("Sidecar produced invalid output: {0}")]
    InvalidOutput(#[from] std::string::FromUtf8Error),

    /// The admission gate was closed.
    #[error("Sidecar admission gate closed")]
    Closed,
}

/// Errors returned to HTTP clients.
///
/// The response bodies are fixed strings; the underlying cause is only logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(#[from] serde_json::Error),

    #[error(transparent)]
    Sidecar(#[from] SidecarError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Invalid request").into_response(),
            ApiError::Sidecar(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error executing sidecar").into_response()
            }
        }
    }
}
