use super::{CursorPage, ExternalUrls, Image};
use crate::decode::skip_nulls;
use serde::{Deserialize, Serialize};

/// Artist as embedded in albums and tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    #[serde(rename = "id")]
    pub artist_id: String,
    pub name: String,
    pub uri: String,
}

/// Full artist object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(rename = "id")]
    pub artist_id: String,
    pub name: String,
    pub uri: String,
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_urls: Option<ExternalUrls>,
}

/// `GET v1/artists?ids=..`
#[derive(Debug, Deserialize)]
pub(crate) struct ArtistsResponse {
    #[serde(deserialize_with = "skip_nulls")]
    pub artists: Vec<Artist>,
}

/// `GET v1/me/following?type=artist`
#[derive(Debug, Deserialize)]
pub(crate) struct FollowedArtistsResponse {
    pub artists: CursorPage<Artist>,
}
