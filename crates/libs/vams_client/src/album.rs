use crate::client::VamsClient;
use crate::error::VamsError;
use crate::interfaces::{Album, AlbumData};

impl VamsClient {
    /// Fetch an album with its ordered images, properties normalized.
    pub async fn fetch_album_by_title(&self, title: &str) -> Result<AlbumData, VamsError> {
        let mut data: AlbumData = self.fetch_api(&format!("/albums/by-title/{title}")).await?;
        data.normalize_properties();
        Ok(data)
    }

    pub async fn fetch_album_by_id(&self, id: &str) -> Result<AlbumData, VamsError> {
        let mut data: AlbumData = self.fetch_api(&format!("/albums/{id}")).await?;
        data.normalize_properties();
        Ok(data)
    }

    /// List all albums: the public (unauthenticated) endpoint first, the
    /// authenticated one on any failure.
    pub async fn fetch_all_albums(&self) -> Result<Vec<Album>, VamsError> {
        self.fetch_with_fallback("/public/albums", "/albums").await
    }
}
