//! HTTP transport for the Spotify Web API.

use crate::auth::TokenProvider;
use crate::error::{Result, SpotifyError};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

const ACCEPT_VALUE: &str = "application/json, text/plain, */*";

/// Query string pairs attached to a request.
pub type Query<'a> = [(&'a str, String)];

#[derive(Default)]
struct TokenState {
    access_token: Option<String>,
    provider: Option<Arc<dyn TokenProvider>>,
}

/// Authenticated request sender bound to one API base URL.
///
/// Holds no state besides the bearer token; every call is a single
/// request/response exchange with no retries.
#[derive(Clone)]
pub struct Transport {
    http: Client,
    api_url: String,
    request_timeout: Duration,
    user_agent: String,
    tokens: Arc<RwLock<TokenState>>,
}

impl Transport {
    pub(crate) fn new(
        http: Client,
        api_url: String,
        request_timeout: Duration,
        access_token: Option<String>,
    ) -> Self {
        Self {
            http,
            api_url,
            request_timeout,
            user_agent: format!("SoulSpotify/{}", env!("CARGO_PKG_VERSION")),
            tokens: Arc::new(RwLock::new(TokenState {
                access_token,
                provider: None,
            })),
        }
    }

    /// Base URL requests are sent to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(crate) async fn set_access_token(&self, token: String) {
        self.tokens.write().await.access_token = Some(token);
    }

    pub(crate) async fn access_token(&self) -> Option<String> {
        self.tokens.read().await.access_token.clone()
    }

    pub(crate) async fn set_token_provider(&self, provider: Option<Arc<dyn TokenProvider>>) {
        self.tokens.write().await.provider = provider;
    }

    pub(crate) async fn has_token_source(&self) -> bool {
        let tokens = self.tokens.read().await;
        tokens.access_token.is_some() || tokens.provider.is_some()
    }

    /// Ask the token provider for a fresh token and store it.
    ///
    /// Without a provider this leaves the stored token untouched.
    pub async fn refresh_token(&self) -> Result<()> {
        let provider = self.tokens.read().await.provider.clone();

        if let Some(provider) = provider {
            let token = provider.access_token().await?;
            self.tokens.write().await.access_token = Some(token);
            debug!("Access token refreshed");
        }

        Ok(())
    }

    async fn bearer_token(&self) -> Result<String> {
        self.refresh_token().await?;
        self.access_token().await.ok_or(SpotifyError::AuthRequired)
    }

    /// Perform one request against `{api_url}/{path}`.
    ///
    /// Returns `None` for "204 No Content" and empty bodies, the raw body for
    /// other 2xx responses, and `SpotifyError::Status` for anything else.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
        body: Option<Value>,
    ) -> Result<Option<String>> {
        let url = format!("{}/{}", self.api_url, path);
        let token = self.bearer_token().await?;

        debug!(method = %method, url = %url, query = ?query, "Sending request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .timeout(self.request_timeout)
            .bearer_auth(token)
            .header(ACCEPT, ACCEPT_VALUE)
            .header(USER_AGENT, &self.user_agent);

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(method = %method, url = %url, status = %status, "Request failed");
            return Err(SpotifyError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    pub async fn get(&self, path: &str, query: &Query<'_>) -> Result<Option<String>> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn put(&self, path: &str, query: &Query<'_>) -> Result<Option<String>> {
        self.request(Method::PUT, path, query, None).await
    }

    pub async fn post(&self, path: &str, query: &Query<'_>) -> Result<Option<String>> {
        self.request(Method::POST, path, query, None).await
    }

    pub async fn delete(&self, path: &str, query: &Query<'_>) -> Result<Option<String>> {
        self.request(Method::DELETE, path, query, None).await
    }

    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Query<'_>,
        body: &B,
    ) -> Result<Option<String>> {
        self.request(Method::PUT, path, query, Some(to_json(body)?))
            .await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Query<'_>,
        body: &B,
    ) -> Result<Option<String>> {
        self.request(Method::POST, path, query, Some(to_json(body)?))
            .await
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| SpotifyError::InvalidInput(e.to_string()))
}

/// Optional `device_id` query parameter shared by the player endpoints.
pub(crate) fn device_query(device_id: Option<&str>) -> Vec<(&'static str, String)> {
    device_id
        .map(|id| vec![("device_id", id.to_string())])
        .unwrap_or_default()
}
