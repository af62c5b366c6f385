//! Records decoded from Spotify Web API responses.
//!
//! Field names follow the JSON payloads, except identifiers which are
//! exposed as `<kind>_id` and `type` discriminators which are exposed as
//! `<kind>_type`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod album;
mod artist;
mod browse;
mod enums;
mod player;
mod playlist;
mod show;
mod track;
mod user;

pub use album::{Album, SavedAlbum, SimplifiedAlbum};
pub use artist::{Artist, SimplifiedArtist};
pub use browse::Category;
pub use enums::{
    AlbumType, ContextType, CurrentlyPlayingType, DeviceType, ProductType, ReleaseDatePrecision,
    RepeatMode,
};
pub use player::{Context, CurrentPlaying, Device, Item, PlaybackState};
pub use playlist::{BasePlaylist, Playlist, PlaylistOwner, PlaylistTrack};
pub use show::{Episode, SavedShow, Show, SimplifiedEpisode, SimplifiedShow};
pub use track::{PlayedTrack, SavedTrack, SimplifiedTrack, Track};
pub use user::{BaseUserProfile, UserProfile};

pub(crate) use album::{AlbumsResponse, NewReleasesResponse, SavedAlbumsResponse};
pub(crate) use artist::{ArtistsResponse, FollowedArtistsResponse};
pub(crate) use browse::{BrowsePlaylistsResponse, CategoriesResponse, PlaylistsResponse};
pub(crate) use player::DevicesResponse;
pub(crate) use track::TracksResponse;

/// Links to the item on the Spotify web player, keyed by site (`"spotify"`).
pub type ExternalUrls = HashMap<String, String>;

/// Cover art or profile picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// Offset-based page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    pub next: Option<String>,
    pub offset: u32,
    pub previous: Option<String>,
    pub total: u32,
}

/// Cursor-based page of results (recently played, followed artists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPage<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    pub next: Option<String>,
    pub cursors: Option<Cursors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursors {
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}
