//! Error types for Zenbook
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling. Backend failures are
//! normalized into a small taxonomy so that callers see an error kind
//! rather than raw transport detail.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for Zenbook operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, authentication, session booking operations,
/// and credential storage.
#[derive(Error, Debug)]
pub enum ZenbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client-detected validation failure, raised before any request is sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// The current identity lacks privilege or the session expired (401/403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The requested resource id could not be resolved (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request conflicts with existing state, e.g. a duplicate (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backend 5xx or transport-level failure
    #[error("Server error: {0}")]
    Server(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Keyring/credential storage errors
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

impl ZenbookError {
    /// Map an HTTP status code and response body to an error kind
    ///
    /// Applies the backend contract: 400 is a validation failure, 401/403
    /// an authorization failure, 404 a missing resource, 409 a conflict,
    /// and everything else (including all 5xx) a server error.
    pub fn from_status(status: StatusCode, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match status {
            StatusCode::BAD_REQUEST => Self::Validation(detail),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(detail),
            StatusCode::NOT_FOUND => Self::NotFound(detail),
            StatusCode::CONFLICT => Self::Conflict(detail),
            _ => Self::Server(format!("{}: {}", status, detail)),
        }
    }
}

/// Result type alias for Zenbook operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation. Typed
/// failures remain recoverable by downcasting to [`ZenbookError`].
pub type Result<T> = anyhow::Result<T>;
