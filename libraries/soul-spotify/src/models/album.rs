use super::{
    AlbumType, ExternalUrls, Image, Page, ReleaseDatePrecision, SimplifiedArtist, SimplifiedTrack,
};
use crate::decode::skip_nulls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Album as embedded in tracks and listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedAlbum {
    #[serde(rename = "id")]
    pub album_id: String,
    pub name: String,
    pub album_type: AlbumType,
    pub total_tracks: u32,
    pub images: Vec<Image>,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    pub uri: String,
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_urls: Option<ExternalUrls>,
}

/// Full album object including its first page of tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    #[serde(rename = "id")]
    pub album_id: String,
    pub name: String,
    pub album_type: AlbumType,
    pub total_tracks: u32,
    pub images: Vec<Image>,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    pub uri: String,
    pub artists: Vec<SimplifiedArtist>,
    pub tracks: Page<SimplifiedTrack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_urls: Option<ExternalUrls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Album in the user's library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAlbum {
    pub added_at: DateTime<Utc>,
    pub album: Album,
}

/// `GET v1/albums?ids=..`
#[derive(Debug, Deserialize)]
pub(crate) struct AlbumsResponse {
    #[serde(deserialize_with = "skip_nulls")]
    pub albums: Vec<Album>,
}

/// `GET v1/browse/new-releases`
#[derive(Debug, Deserialize)]
pub(crate) struct NewReleasesResponse {
    pub albums: Page<SimplifiedAlbum>,
}

/// `GET v1/me/albums`
#[derive(Debug, Deserialize)]
pub(crate) struct SavedAlbumsResponse {
    #[serde(deserialize_with = "skip_nulls")]
    pub items: Vec<SavedAlbum>,
}
