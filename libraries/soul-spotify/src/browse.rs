//! Browse endpoints: featured playlists, categories and new releases.

use crate::decode::decode_required;
use crate::error::Result;
use crate::ids::path_segment;
use crate::models::{
    BasePlaylist, BrowsePlaylistsResponse, CategoriesResponse, Category, NewReleasesResponse,
    SimplifiedAlbum,
};
use crate::transport::Transport;

/// Client for the `v1/browse` endpoints.
pub struct BrowseClient<'a> {
    transport: &'a Transport,
}

impl<'a> BrowseClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get_featured_playlists(&self) -> Result<Vec<BasePlaylist>> {
        let path = "v1/browse/featured-playlists";
        let body = self
            .transport
            .get(path, &[("limit", "48".to_string())])
            .await?;

        let response: BrowsePlaylistsResponse = decode_required(path, body)?;
        Ok(response.playlists.items)
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        let path = "v1/browse/categories";
        let body = self
            .transport
            .get(path, &[("limit", "48".to_string())])
            .await?;

        let response: CategoriesResponse = decode_required(path, body)?;
        Ok(response.categories.items)
    }

    pub async fn get_category(&self, category_id: &str) -> Result<Category> {
        let path = format!("v1/browse/categories/{}", path_segment(category_id));
        let body = self.transport.get(&path, &[]).await?;

        decode_required(&path, body)
    }

    pub async fn get_category_playlists(&self, category_id: &str) -> Result<Vec<BasePlaylist>> {
        let path = format!(
            "v1/browse/categories/{}/playlists",
            path_segment(category_id)
        );
        let body = self
            .transport
            .get(&path, &[("limit", "48".to_string())])
            .await?;

        let response: BrowsePlaylistsResponse = decode_required(&path, body)?;
        Ok(response.playlists.items)
    }

    pub async fn get_new_releases(&self) -> Result<Vec<SimplifiedAlbum>> {
        let path = "v1/browse/new-releases";
        let body = self
            .transport
            .get(path, &[("limit", "48".to_string())])
            .await?;

        let response: NewReleasesResponse = decode_required(path, body)?;
        Ok(response.albums.items)
    }
}
