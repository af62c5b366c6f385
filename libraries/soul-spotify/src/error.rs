//! Error types for the Spotify client.

use thiserror::Error;

/// Errors that can occur when talking to the Spotify Web API.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// Request could not be delivered (connect failure, reset, bad response framing)
    #[error("Connection to Spotify failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("Timeout occurred while connecting to Spotify")]
    Timeout,

    /// Spotify answered with a non-2xx status
    #[error("Spotify returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Spotify reported the resource as missing inside a successful response
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response at `{path}`: {message}")]
    Decode { path: String, message: String },

    /// No access token and no token provider configured
    #[error("Authentication required")]
    AuthRequired,

    /// The caller-supplied token provider failed
    #[error("Token provider failed: {0}")]
    TokenProvider(String),

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Request arguments rejected before anything was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SpotifyError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SpotifyError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Connection(error)
        }
    }
}

/// Result type for Spotify client operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
