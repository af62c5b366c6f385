//! Playback state and control endpoints.

use crate::decode::{decode_optional, decode_required};
use crate::error::Result;
use crate::models::{
    CurrentPlaying, CursorPage, Device, DevicesResponse, PlaybackState, PlayedTrack, RepeatMode,
};
use crate::transport::{device_query, Transport};
use crate::types::{QueueBody, StartPlayback, StartPlaybackBody, TransferPlaybackBody};
use tracing::debug;

/// Item kinds requested alongside playback state.
const ADDITIONAL_TYPES: &str = "track,episode";

/// Client for the `v1/me/player` endpoints.
pub struct PlayerClient<'a> {
    transport: &'a Transport,
}

impl<'a> PlayerClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Get the full playback state.
    ///
    /// Returns `None` when no device is active.
    pub async fn get_playback(&self) -> Result<Option<PlaybackState>> {
        let path = "v1/me/player";
        let query = [("additional_types", ADDITIONAL_TYPES.to_string())];
        let body = self.transport.get(path, &query).await?;

        decode_optional(path, body)
    }

    /// Get the item currently playing.
    ///
    /// Returns `None` when nothing is playing.
    pub async fn get_currently_playing(&self) -> Result<Option<CurrentPlaying>> {
        let path = "v1/me/player/currently-playing";
        let query = [("additional_types", ADDITIONAL_TYPES.to_string())];
        let body = self.transport.get(path, &query).await?;

        decode_optional(path, body)
    }

    /// List the devices available for playback.
    pub async fn get_devices(&self) -> Result<Vec<Device>> {
        let path = "v1/me/player/devices";
        let body = self.transport.get(path, &[]).await?;

        let response: DevicesResponse = decode_required(path, body)?;
        debug!(devices = response.devices.len(), "Fetched devices");

        Ok(response.devices)
    }

    /// Move playback to another device.
    pub async fn transfer_playback(&self, device_id: &str) -> Result<()> {
        let body = TransferPlaybackBody {
            device_ids: vec![device_id.to_string()],
        };

        self.transport.put_json("v1/me/player", &[], &body).await?;
        Ok(())
    }

    /// Start a new context or resume the current one.
    pub async fn start_playback(&self, options: StartPlayback) -> Result<()> {
        let query = device_query(options.device_id.as_deref());
        let body = StartPlaybackBody::from(&options);

        self.transport
            .put_json("v1/me/player/play", &query, &body)
            .await?;
        Ok(())
    }

    pub async fn pause_playback(&self, device_id: Option<&str>) -> Result<()> {
        self.transport
            .put("v1/me/player/pause", &device_query(device_id))
            .await?;
        Ok(())
    }

    pub async fn next_track(&self, device_id: Option<&str>) -> Result<()> {
        self.transport
            .post("v1/me/player/next", &device_query(device_id))
            .await?;
        Ok(())
    }

    pub async fn previous_track(&self, device_id: Option<&str>) -> Result<()> {
        self.transport
            .post("v1/me/player/previous", &device_query(device_id))
            .await?;
        Ok(())
    }

    /// Seek to a position in the current item, in milliseconds.
    pub async fn seek_track(&self, position_ms: u64, device_id: Option<&str>) -> Result<()> {
        let mut query = vec![("position_ms", position_ms.to_string())];
        query.extend(device_query(device_id));

        self.transport.put("v1/me/player/seek", &query).await?;
        Ok(())
    }

    pub async fn set_repeat(&self, mode: RepeatMode, device_id: Option<&str>) -> Result<()> {
        let mut query = vec![("state", mode.to_string())];
        query.extend(device_query(device_id));

        self.transport.put("v1/me/player/repeat", &query).await?;
        Ok(())
    }

    /// Set the volume of the device, in percent.
    pub async fn set_volume(&self, volume_percent: u8, device_id: Option<&str>) -> Result<()> {
        let mut query = vec![("volume_percent", volume_percent.to_string())];
        query.extend(device_query(device_id));

        self.transport.put("v1/me/player/volume", &query).await?;
        Ok(())
    }

    pub async fn set_shuffle(&self, state: bool, device_id: Option<&str>) -> Result<()> {
        let mut query = vec![("state", state.to_string())];
        query.extend(device_query(device_id));

        self.transport.put("v1/me/player/shuffle", &query).await?;
        Ok(())
    }

    /// Append a track or episode URI to the queue.
    pub async fn add_to_queue(&self, uri: &str, device_id: Option<&str>) -> Result<()> {
        let body = QueueBody {
            uri: uri.to_string(),
            device_id: device_id.map(str::to_string),
        };

        self.transport
            .post_json("v1/me/player/queue", &[], &body)
            .await?;
        Ok(())
    }

    /// Get the user's recently played tracks.
    pub async fn get_recently_played_tracks(&self) -> Result<Vec<PlayedTrack>> {
        let path = "v1/me/player/recently-played";
        let query = [("limit", "48".to_string())];
        let body = self.transport.get(path, &query).await?;

        let page: CursorPage<PlayedTrack> = decode_required(path, body)?;
        Ok(page.items)
    }
}
