use super::player::playable_item;
use super::{ExternalUrls, Image, Item, Page};
use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistOwner {
    #[serde(rename = "id")]
    pub owner_id: String,
    pub display_name: Option<String>,
    pub external_urls: ExternalUrls,
    pub href: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
}

/// Playlist as returned by listings, without its tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePlaylist {
    #[serde(rename = "id")]
    pub playlist_id: String,
    pub name: String,
    pub collaborative: bool,
    pub description: Option<String>,
    pub external_urls: ExternalUrls,
    /// Spotify sends `null` for playlists without artwork
    #[serde(default, deserialize_with = "images_or_empty")]
    pub images: Vec<Image>,
    pub owner: PlaylistOwner,
    pub public: Option<bool>,
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
}

/// Full playlist object including its first page of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "id")]
    pub playlist_id: String,
    pub name: String,
    pub collaborative: bool,
    pub description: Option<String>,
    pub external_urls: ExternalUrls,
    #[serde(default, deserialize_with = "images_or_empty")]
    pub images: Vec<Image>,
    pub owner: PlaylistOwner,
    pub public: Option<bool>,
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
    pub tracks: Page<PlaylistTrack>,
}

impl Playlist {
    /// Entries that can be played through the API, skipping local files.
    pub fn playable_items(&self) -> impl Iterator<Item = &Item> {
        self.tracks
            .items
            .iter()
            .filter(|entry| !entry.is_local)
            .filter_map(|entry| entry.track.as_ref())
    }
}

/// Entry of a playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub added_at: Option<DateTime<Utc>>,
    pub is_local: bool,
    /// Absent for local files and for items removed from the catalog
    #[serde(default, deserialize_with = "playable_item")]
    pub track: Option<Item>,
}

fn images_or_empty<'de, D>(deserializer: D) -> Result<Vec<Image>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Image>>::deserialize(deserializer)?.unwrap_or_default())
}
