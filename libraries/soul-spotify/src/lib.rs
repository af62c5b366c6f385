//! Soul Spotify
//!
//! Async client library for the Spotify Web API.
//!
//! # Features
//!
//! - **Playback**: Read playback state, control the active device, manage the queue
//! - **Catalog**: Albums, artists, playlists, shows and episodes
//! - **Library**: Profile, saved albums, tracks and shows, followed artists, top items
//! - **Browse**: Featured playlists, categories and new releases
//!
//! Responses are decoded into typed models. Enumerated values Spotify may
//! extend later decode to an `Unknown` variant instead of failing, and decode
//! errors report the path of the offending field.
//!
//! # Example
//!
//! ```ignore
//! use soul_spotify::{SpotifyClient, SpotifyConfig, StartPlayback};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotifyClient::new(SpotifyConfig::new())?;
//!     client.authenticate("BQD...").await;
//!
//!     match client.player().get_currently_playing().await? {
//!         Some(current) => println!("Playing: {}", current.is_playing),
//!         None => println!("Nothing playing"),
//!     }
//!
//!     client
//!         .player()
//!         .start_playback(StartPlayback {
//!             context_uri: Some("spotify:album:1ATL5GLyefJaxhQzSPVrLX".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     client.close();
//!     Ok(())
//! }
//! ```

mod auth;
mod browse;
mod catalog;
mod client;
mod decode;
mod error;
mod ids;
mod library;
pub mod models;
mod player;
mod transport;
mod types;

// Re-export main types
pub use auth::TokenProvider;
pub use client::SpotifyClient;
pub use decode::decode;
pub use error::{Result, SpotifyError};
pub use ids::identifier;
pub use transport::{Query, Transport};
pub use types::{SpotifyConfig, StartPlayback, DEFAULT_API_URL};

// Re-export sub-clients for direct use if needed
pub use browse::BrowseClient;
pub use catalog::CatalogClient;
pub use library::LibraryClient;
pub use player::PlayerClient;

pub use models::*;
