use super::{BasePlaylist, Image, Page};
use crate::decode::skip_nulls;
use serde::{Deserialize, Serialize};

/// Browse category ("Dinner", "Rock", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "id")]
    pub category_id: String,
    pub name: String,
    pub href: String,
    pub icons: Vec<Image>,
}

/// Page of playlists where the service may pad `items` with `null`.
#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistsResponse {
    #[serde(deserialize_with = "skip_nulls")]
    pub items: Vec<BasePlaylist>,
}

/// `GET v1/browse/featured-playlists` and `GET v1/browse/categories/{id}/playlists`
#[derive(Debug, Deserialize)]
pub(crate) struct BrowsePlaylistsResponse {
    pub playlists: PlaylistsResponse,
}

/// `GET v1/browse/categories`
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    pub categories: Page<Category>,
}
