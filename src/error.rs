//! Error types for the orgkit CLI

use std::time::Duration;
use thiserror::Error;

/// Result type alias for orgkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provision(Box<crate::workflow::ProvisionError>),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

// Boxed because ProvisionError wraps this type in its Step variant
impl From<crate::workflow::ProvisionError> for Error {
    fn from(err: crate::workflow::ProvisionError) -> Self {
        Error::Provision(Box::new(err))
    }
}

/// Errors surfaced from the GitHub REST API.
///
/// Remote failures carry the response body as the cause text; nothing is
/// reinterpreted at this layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Run `orgkit init` to set up your access token.")]
    Unauthorized,

    #[error("Access denied. Organization admin rights are required for this operation.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `orgkit init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Access token not configured. Run `orgkit init` to set up your token.")]
    MissingToken,

    #[error(
        "Organization not configured. Run `orgkit org set <LOGIN>` to set a default organization."
    )]
    MissingOrg,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
