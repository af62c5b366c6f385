//! The authenticated user's profile, saved items and listening history.

use crate::decode::decode_required;
use crate::error::Result;
use crate::ids::join_ids;
use crate::models::{
    Artist, BasePlaylist, FollowedArtistsResponse, Page, PlaylistsResponse, SavedAlbum,
    SavedAlbumsResponse, SavedShow, SavedTrack, Track, UserProfile,
};
use crate::transport::Transport;
use tracing::debug;

/// Client for the `v1/me` endpoints.
pub struct LibraryClient<'a> {
    transport: &'a Transport,
}

impl<'a> LibraryClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    fn listing_query() -> [(&'static str, String); 1] {
        [("limit", "48".to_string())]
    }

    pub async fn get_current_user(&self) -> Result<UserProfile> {
        let path = "v1/me";
        let body = self.transport.get(path, &[]).await?;

        decode_required(path, body)
    }

    /// Get playlists owned or followed by the user.
    pub async fn get_playlists(&self) -> Result<Vec<BasePlaylist>> {
        let path = "v1/me/playlists";
        let body = self.transport.get(path, &Self::listing_query()).await?;

        let response: PlaylistsResponse = decode_required(path, body)?;
        debug!(playlists = response.items.len(), "Fetched user playlists");

        Ok(response.items)
    }

    pub async fn get_followed_artists(&self) -> Result<Vec<Artist>> {
        let path = "v1/me/following";
        let query = [("type", "artist".to_string()), ("limit", "48".to_string())];
        let body = self.transport.get(path, &query).await?;

        let response: FollowedArtistsResponse = decode_required(path, body)?;
        Ok(response.artists.items)
    }

    pub async fn get_saved_albums(&self) -> Result<Vec<SavedAlbum>> {
        let path = "v1/me/albums";
        let body = self.transport.get(path, &Self::listing_query()).await?;

        let response: SavedAlbumsResponse = decode_required(path, body)?;
        Ok(response.items)
    }

    /// Save up to 50 albums to the library.
    pub async fn save_albums<S: AsRef<str>>(&self, album_ids: &[S]) -> Result<()> {
        let Some(ids) = join_ids(album_ids, 50, "albums", "saved")? else {
            return Ok(());
        };

        self.transport.put("v1/me/albums", &[("ids", ids)]).await?;
        Ok(())
    }

    /// Remove up to 50 albums from the library.
    pub async fn remove_saved_albums<S: AsRef<str>>(&self, album_ids: &[S]) -> Result<()> {
        let Some(ids) = join_ids(album_ids, 50, "albums", "removed")? else {
            return Ok(());
        };

        self.transport
            .delete("v1/me/albums", &[("ids", ids)])
            .await?;
        Ok(())
    }

    /// Check which of up to 20 albums are saved, in request order.
    pub async fn are_albums_saved<S: AsRef<str>>(&self, album_ids: &[S]) -> Result<Vec<bool>> {
        let Some(ids) = join_ids(album_ids, 20, "albums", "checked")? else {
            return Ok(Vec::new());
        };

        let path = "v1/me/albums/contains";
        let body = self.transport.get(path, &[("ids", ids)]).await?;

        decode_required(path, body)
    }

    pub async fn get_saved_tracks(&self) -> Result<Vec<SavedTrack>> {
        let path = "v1/me/tracks";
        let body = self.transport.get(path, &Self::listing_query()).await?;

        let page: Page<SavedTrack> = decode_required(path, body)?;
        Ok(page.items)
    }

    pub async fn get_saved_shows(&self) -> Result<Vec<SavedShow>> {
        let path = "v1/me/shows";
        let body = self.transport.get(path, &Self::listing_query()).await?;

        let page: Page<SavedShow> = decode_required(path, body)?;
        Ok(page.items)
    }

    pub async fn get_top_artists(&self) -> Result<Vec<Artist>> {
        let path = "v1/me/top/artists";
        let body = self.transport.get(path, &Self::listing_query()).await?;

        let page: Page<Artist> = decode_required(path, body)?;
        Ok(page.items)
    }

    pub async fn get_top_tracks(&self) -> Result<Vec<Track>> {
        let path = "v1/me/top/tracks";
        let body = self.transport.get(path, &Self::listing_query()).await?;

        let page: Page<Track> = decode_required(path, body)?;
        Ok(page.items)
    }
}
