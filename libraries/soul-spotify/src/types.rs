//! Configuration and request body types for the Spotify client.

use serde::Serialize;
use std::time::Duration;

/// Default Spotify Web API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com";

/// Configuration for connecting to the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    /// Base URL of the API (e.g., "https://api.spotify.com")
    pub api_url: String,
    /// Bearer token used when no token provider is installed
    pub access_token: Option<String>,
    /// Upper bound for a whole request, including reading the body
    pub request_timeout: Duration,
    /// Upper bound for establishing the connection
    pub connect_timeout: Duration,
}

impl SpotifyConfig {
    /// Create a config pointing at the public API without a token.
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Use a different API base URL (mock servers, proxies).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Start with an existing access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Player Request Types
// =============================================================================

/// Options for starting or resuming playback.
///
/// All fields are optional; the default resumes the current context from
/// the start of the current item.
#[derive(Debug, Clone, Default)]
pub struct StartPlayback {
    /// Target device (defaults to the active one)
    pub device_id: Option<String>,
    /// Album, artist or playlist URI to play
    pub context_uri: Option<String>,
    /// Explicit track URIs to play
    pub uris: Option<Vec<String>>,
    /// Index into the context or `uris` to start from
    pub position_offset: Option<u32>,
    /// URI inside the context or `uris` to start from; wins over `position_offset`
    pub uri_offset: Option<String>,
    /// Position in the first item, in milliseconds
    pub position_ms: u64,
}

/// Body sent to `PUT v1/me/player/play`.
#[derive(Debug, Serialize)]
pub(crate) struct StartPlaybackBody {
    pub position_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<PlaybackOffset>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PlaybackOffset {
    Position(u32),
    Uri(String),
}

impl From<&StartPlayback> for StartPlaybackBody {
    fn from(options: &StartPlayback) -> Self {
        let offset = match (&options.uri_offset, options.position_offset) {
            (Some(uri), _) => Some(PlaybackOffset::Uri(uri.clone())),
            (None, Some(position)) if position > 0 => Some(PlaybackOffset::Position(position)),
            _ => None,
        };

        Self {
            position_ms: options.position_ms,
            context_uri: options.context_uri.clone().filter(|uri| !uri.is_empty()),
            uris: options.uris.clone().filter(|uris| !uris.is_empty()),
            offset,
        }
    }
}

/// Body sent to `PUT v1/me/player`.
#[derive(Debug, Serialize)]
pub(crate) struct TransferPlaybackBody {
    pub device_ids: Vec<String>,
}

/// Body sent to `POST v1/me/player/queue`.
#[derive(Debug, Serialize)]
pub(crate) struct QueueBody {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}
