use super::{ExternalUrls, Image, Page, ReleaseDatePrecision};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Podcast as embedded in episodes and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedShow {
    #[serde(rename = "id")]
    pub show_id: String,
    pub name: String,
    pub uri: String,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub publisher: String,
    pub description: String,
    pub total_episodes: Option<u32>,
}

/// Full podcast object including its first page of episodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    #[serde(rename = "id")]
    pub show_id: String,
    pub name: String,
    pub uri: String,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub publisher: String,
    pub description: String,
    pub total_episodes: Option<u32>,
    pub episodes: Page<SimplifiedEpisode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedEpisode {
    #[serde(rename = "id")]
    pub episode_id: String,
    pub name: String,
    pub uri: String,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub duration_ms: u64,
    pub explicit: bool,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    pub description: String,
}

/// Full episode object, including the show it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(rename = "id")]
    pub episode_id: String,
    pub name: String,
    pub uri: String,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub duration_ms: u64,
    pub explicit: bool,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    pub description: String,
    pub show: SimplifiedShow,
}

/// Show in the user's library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedShow {
    pub added_at: DateTime<Utc>,
    pub show: SimplifiedShow,
}
