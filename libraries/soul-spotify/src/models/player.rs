use super::{
    ContextType, CurrentlyPlayingType, DeviceType, Episode, ExternalUrls, RepeatMode, Track,
};
use crate::decode::nested;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A registered playback endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Missing for devices that cannot be targeted by id
    #[serde(rename = "id")]
    pub device_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub is_active: bool,
    pub is_private_session: bool,
    pub is_restricted: bool,
    pub volume_percent: Option<u32>,
    #[serde(default = "default_supports_volume")]
    pub supports_volume: bool,
}

fn default_supports_volume() -> bool {
    true
}

/// `GET v1/me/player/devices`
#[derive(Debug, Deserialize)]
pub(crate) struct DevicesResponse {
    pub devices: Vec<Device>,
}

/// Album, artist, playlist or collection the current item was started from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "type")]
    pub context_type: ContextType,
    pub uri: String,
    pub href: String,
    pub external_urls: ExternalUrls,
}

/// Playable item, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Track(Box<Track>),
    Episode(Box<Episode>),
    /// Item kind not known to this client (ads, audiobook chapters, ...)
    Unknown,
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Item::from_value(Value::deserialize(deserializer)?)
    }
}

impl Item {
    /// Dispatch on `type`, decoding the payload so that failures keep their
    /// path inside the item.
    fn from_value<E: de::Error>(value: Value) -> Result<Self, E> {
        let kind = match value.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(_) => return Err(E::custom("item `type` is not a string")),
            None => return Err(E::missing_field("type")),
        };

        match kind.as_str() {
            "track" => nested(value).map(|track| Self::Track(Box::new(track))),
            "episode" => nested(value).map(|episode| Self::Episode(Box::new(episode))),
            _ => Ok(Self::Unknown),
        }
    }

    pub fn as_track(&self) -> Option<&Track> {
        match self {
            Self::Track(track) => Some(track),
            _ => None,
        }
    }

    pub fn as_episode(&self) -> Option<&Episode> {
        match self {
            Self::Episode(episode) => Some(episode),
            _ => None,
        }
    }

    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::Track(track) => Some(&track.uri),
            Self::Episode(episode) => Some(&episode.uri),
            Self::Unknown => None,
        }
    }
}

/// Decode an optional playable item, treating local files as absent.
///
/// Local files carry no catalog identifiers, so they cannot be represented
/// as a [`Track`].
pub(crate) fn playable_item<'de, D>(deserializer: D) -> Result<Option<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if value.get("is_local").and_then(Value::as_bool) == Some(true) {
        return Ok(None);
    }

    Item::from_value(value).map(Some)
}

/// `GET v1/me/player/currently-playing`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPlaying {
    pub context: Option<Context>,
    #[serde(rename = "progress_ms")]
    pub progress: Option<u64>,
    pub is_playing: bool,
    #[serde(default, deserialize_with = "playable_item")]
    pub item: Option<Item>,
    pub currently_playing_type: Option<CurrentlyPlayingType>,
}

/// `GET v1/me/player`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    pub context: Option<Context>,
    #[serde(rename = "progress_ms")]
    pub progress: Option<u64>,
    pub is_playing: bool,
    #[serde(default, deserialize_with = "playable_item")]
    pub item: Option<Item>,
    pub currently_playing_type: Option<CurrentlyPlayingType>,
    #[serde(rename = "shuffle_state")]
    pub shuffle: bool,
    #[serde(rename = "repeat_state")]
    pub repeat_mode: RepeatMode,
}
