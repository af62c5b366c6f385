//! Bearer token supply.
//!
//! Token acquisition (OAuth flows, storage) is left to the caller. The client
//! either uses a fixed token set through `SpotifyClient::authenticate`, or
//! asks a [`TokenProvider`] before every request.

use crate::error::Result;
use async_trait::async_trait;
use std::future::Future;

/// Source of fresh access tokens.
///
/// Called before every request; implementations are expected to cache and
/// only hit the token endpoint when the current token is about to expire.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

#[async_trait]
impl<F, Fut> TokenProvider for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<String>> + Send,
{
    async fn access_token(&self) -> Result<String> {
        (self)().await
    }
}
