use super::{Context, ExternalUrls, SimplifiedAlbum, SimplifiedArtist};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Track as listed inside an album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedTrack {
    #[serde(rename = "id")]
    pub track_id: String,
    pub name: String,
    pub artists: Vec<SimplifiedArtist>,
    pub disc_number: u32,
    pub track_number: u32,
    pub duration_ms: u64,
    pub explicit: bool,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub is_local: bool,
    pub uri: String,
}

/// Full track object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "id")]
    pub track_id: String,
    pub name: String,
    pub album: SimplifiedAlbum,
    pub artists: Vec<SimplifiedArtist>,
    pub disc_number: u32,
    pub track_number: u32,
    pub duration_ms: u64,
    pub explicit: bool,
    /// Registry codes keyed by scheme (`isrc`, `ean`, `upc`)
    pub external_ids: HashMap<String, String>,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub is_local: bool,
    pub uri: String,
}

/// Track in the user's library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTrack {
    pub added_at: DateTime<Utc>,
    pub track: Track,
}

/// Entry of the recently played history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayedTrack {
    pub played_at: DateTime<Utc>,
    pub track: Track,
    pub context: Option<Context>,
}

/// `GET v1/artists/{id}/top-tracks`
#[derive(Debug, Deserialize)]
pub(crate) struct TracksResponse {
    pub tracks: Vec<Track>,
}
