//! Main Spotify client.

use crate::auth::TokenProvider;
use crate::browse::BrowseClient;
use crate::catalog::CatalogClient;
use crate::error::{Result, SpotifyError};
use crate::library::LibraryClient;
use crate::player::PlayerClient;
use crate::transport::Transport;
use crate::types::SpotifyConfig;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the Spotify Web API.
///
/// Owns the HTTP connection pool. Cloning is cheap and clones share both the
/// pool and the stored token. Endpoints are grouped into sub-clients that
/// borrow the transport.
///
/// # Example
///
/// ```ignore
/// use soul_spotify::{SpotifyClient, SpotifyConfig};
///
/// let client = SpotifyClient::new(SpotifyConfig::new().with_access_token(token))?;
///
/// if let Some(state) = client.player().get_playback().await? {
///     println!("Playing: {}", state.is_playing);
/// }
///
/// client.close();
/// ```
#[derive(Clone)]
pub struct SpotifyClient {
    transport: Transport,
}

impl SpotifyClient {
    /// Create a new client with its own connection pool.
    pub fn new(config: SpotifyConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(SpotifyError::Connection)?;

        Self::with_http_client(config, http)
    }

    /// Create a client on top of an existing `reqwest::Client`.
    ///
    /// The request timeout from `config` is still applied per request.
    pub fn with_http_client(config: SpotifyConfig, http: Client) -> Result<Self> {
        let api_url = normalize_api_url(&config.api_url)?;
        debug!(api_url = %api_url, "Creating Spotify client");

        Ok(Self {
            transport: Transport::new(
                http,
                api_url,
                config.request_timeout,
                config.access_token,
            ),
        })
    }

    /// Get the API base URL.
    pub fn api_url(&self) -> &str {
        self.transport.api_url()
    }

    /// Use a fixed access token for subsequent requests.
    pub async fn authenticate(&self, token: impl Into<String>) {
        self.transport.set_access_token(token.into()).await;
    }

    /// Install a provider asked for a token before every request.
    pub async fn set_token_provider(&self, provider: impl TokenProvider + 'static) {
        let provider: Arc<dyn TokenProvider> = Arc::new(provider);
        self.transport.set_token_provider(Some(provider)).await;
    }

    pub async fn clear_token_provider(&self) {
        self.transport.set_token_provider(None).await;
    }

    /// Refresh the stored token from the provider, if one is installed.
    pub async fn refresh_token(&self) -> Result<()> {
        self.transport.refresh_token().await
    }

    /// Get the currently stored access token.
    pub async fn access_token(&self) -> Option<String> {
        self.transport.access_token().await
    }

    /// Check if the client has a token or a way to obtain one.
    pub async fn is_authenticated(&self) -> bool {
        self.transport.has_token_source().await
    }

    /// Raw transport, for endpoints not covered by the sub-clients.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Playback state and control.
    pub fn player(&self) -> PlayerClient<'_> {
        PlayerClient::new(&self.transport)
    }

    /// Albums, artists, playlists, shows and public profiles.
    pub fn catalog(&self) -> CatalogClient<'_> {
        CatalogClient::new(&self.transport)
    }

    /// The authenticated user's profile, library and listening history.
    pub fn library(&self) -> LibraryClient<'_> {
        LibraryClient::new(&self.transport)
    }

    /// Featured content, categories and new releases.
    pub fn browse(&self) -> BrowseClient<'_> {
        BrowseClient::new(&self.transport)
    }

    /// Shut this handle down.
    ///
    /// Release is drop-based: clones share one connection pool, and the
    /// pool with its idle connections is released when the last clone is
    /// closed or dropped. Clones still alive keep working after this call.
    pub fn close(self) {
        info!(api_url = %self.transport.api_url(), "Closing Spotify client");
    }
}

fn normalize_api_url(url: &str) -> Result<String> {
    if url.is_empty() {
        return Err(SpotifyError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = url.trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(SpotifyError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    url::Url::parse(&url).map_err(|e| SpotifyError::InvalidUrl(e.to_string()))?;

    Ok(url)
}
