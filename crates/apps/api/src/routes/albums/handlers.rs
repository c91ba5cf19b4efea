use crate::api_state::ApiContext;
use crate::routes::error::GalleryError;
use axum::Json;
use axum::extract::{Path, State};
use vams_client::interfaces::{Album, AlbumData};

/// List all albums.
///
/// The public listing endpoint is tried first; the authenticated one is the
/// fallback.
#[utoipa::path(
    get,
    path = "/albums",
    tag = "Albums",
    responses(
        (status = 200, description = "All albums.", body = Vec<Album>),
        (status = 502, description = "The album service could not be reached."),
    )
)]
pub async fn list_albums_handler(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<Album>>, GalleryError> {
    let albums = context.vams.fetch_all_albums().await?;
    Ok(Json(albums))
}

/// Get one album with its ordered images, properties normalized.
#[utoipa::path(
    get,
    path = "/albums/{album_id}",
    tag = "Albums",
    params(
        ("album_id" = String, Path, description = "The unique ID of the album.")
    ),
    responses(
        (status = 200, description = "The album and its images.", body = AlbumData),
        (status = 404, description = "Album not found."),
        (status = 502, description = "The album service could not be reached."),
    )
)]
pub async fn get_album_handler(
    State(context): State<ApiContext>,
    Path(album_id): Path<String>,
) -> Result<Json<AlbumData>, GalleryError> {
    let data = context.vams.fetch_album_by_id(&album_id).await?;
    Ok(Json(data))
}

/// Get one album by title, as used by gallery page URLs.
#[utoipa::path(
    get,
    path = "/albums/by-title/{title}",
    tag = "Albums",
    params(
        ("title" = String, Path, description = "The album title.")
    ),
    responses(
        (status = 200, description = "The album and its images.", body = AlbumData),
        (status = 404, description = "Album not found."),
        (status = 502, description = "The album service could not be reached."),
    )
)]
pub async fn get_album_by_title_handler(
    State(context): State<ApiContext>,
    Path(title): Path<String>,
) -> Result<Json<AlbumData>, GalleryError> {
    let data = context.vams.fetch_album_by_title(&title).await?;
    Ok(Json(data))
}
