//! Catalog lookups: albums, artists, playlists, shows and public profiles.

use crate::decode::decode_required;
use crate::error::Result;
use crate::ids::{identifier, join_ids, path_segment};
use crate::models::{
    Album, AlbumsResponse, Artist, ArtistsResponse, BaseUserProfile, Episode, Page, Playlist,
    Show, SimplifiedAlbum, SimplifiedEpisode, SimplifiedTrack, Track, TracksResponse,
};
use crate::transport::Transport;
use tracing::debug;

/// Client for public catalog endpoints.
pub struct CatalogClient<'a> {
    transport: &'a Transport,
}

impl<'a> CatalogClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Get an album by id or URI.
    pub async fn get_album(&self, album_id: &str) -> Result<Album> {
        let path = format!("v1/albums/{}", path_segment(identifier(album_id)));
        let body = self.transport.get(&path, &[]).await?;

        decode_required(&path, body)
    }

    /// Get up to 20 albums in one request.
    ///
    /// An empty list returns immediately without a request.
    pub async fn get_albums<S: AsRef<str>>(&self, album_ids: &[S]) -> Result<Vec<Album>> {
        let Some(ids) = join_ids(album_ids, 20, "albums", "requested")? else {
            return Ok(Vec::new());
        };

        let path = "v1/albums";
        let body = self.transport.get(path, &[("ids", ids)]).await?;

        let response: AlbumsResponse = decode_required(path, body)?;
        Ok(response.albums)
    }

    pub async fn get_album_tracks(&self, album_id: &str) -> Result<Vec<SimplifiedTrack>> {
        let path = format!("v1/albums/{}/tracks", path_segment(identifier(album_id)));
        let body = self
            .transport
            .get(&path, &[("limit", "48".to_string())])
            .await?;

        let page: Page<SimplifiedTrack> = decode_required(&path, body)?;
        Ok(page.items)
    }

    /// Get an artist by id or URI.
    pub async fn get_artist(&self, artist_id: &str) -> Result<Artist> {
        let path = format!("v1/artists/{}", path_segment(identifier(artist_id)));
        let body = self.transport.get(&path, &[]).await?;

        decode_required(&path, body)
    }

    /// Get up to 50 artists in one request.
    pub async fn get_artists<S: AsRef<str>>(&self, artist_ids: &[S]) -> Result<Vec<Artist>> {
        let Some(ids) = join_ids(artist_ids, 50, "artists", "requested")? else {
            return Ok(Vec::new());
        };

        let path = "v1/artists";
        let body = self.transport.get(path, &[("ids", ids)]).await?;

        let response: ArtistsResponse = decode_required(path, body)?;
        Ok(response.artists)
    }

    pub async fn get_artist_albums(&self, artist_id: &str) -> Result<Vec<SimplifiedAlbum>> {
        let path = format!("v1/artists/{}/albums", path_segment(identifier(artist_id)));
        let body = self
            .transport
            .get(&path, &[("limit", "48".to_string())])
            .await?;

        let page: Page<SimplifiedAlbum> = decode_required(&path, body)?;
        debug!(albums = page.items.len(), "Fetched artist albums");

        Ok(page.items)
    }

    pub async fn get_artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>> {
        let path = format!("v1/artists/{}/top-tracks", path_segment(identifier(artist_id)));
        let body = self.transport.get(&path, &[]).await?;

        let response: TracksResponse = decode_required(&path, body)?;
        Ok(response.tracks)
    }

    /// Get a playlist with its first page of entries.
    ///
    /// A playlist that no longer exists yields `SpotifyError::NotFound`.
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Playlist> {
        let path = format!("v1/playlists/{}", path_segment(identifier(playlist_id)));
        let query = [("additional_types", "track,episode".to_string())];
        let body = self.transport.get(&path, &query).await?;

        decode_required(&path, body)
    }

    pub async fn get_show(&self, show_id: &str) -> Result<Show> {
        let path = format!("v1/shows/{}", path_segment(identifier(show_id)));
        let body = self.transport.get(&path, &[]).await?;

        decode_required(&path, body)
    }

    pub async fn get_show_episodes(&self, show_id: &str) -> Result<Vec<SimplifiedEpisode>> {
        let path = format!("v1/shows/{}/episodes", path_segment(identifier(show_id)));
        let body = self
            .transport
            .get(&path, &[("limit", "48".to_string())])
            .await?;

        let page: Page<SimplifiedEpisode> = decode_required(&path, body)?;
        Ok(page.items)
    }

    pub async fn get_episode(&self, episode_id: &str) -> Result<Episode> {
        let path = format!("v1/episodes/{}", path_segment(identifier(episode_id)));
        let body = self.transport.get(&path, &[]).await?;

        decode_required(&path, body)
    }

    /// Get the public profile of a user.
    pub async fn get_user(&self, user_id: &str) -> Result<BaseUserProfile> {
        let path = format!("v1/users/{}", path_segment(user_id));
        let body = self.transport.get(&path, &[]).await?;

        decode_required(&path, body)
    }
}
