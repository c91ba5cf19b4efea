use crate::api_state::ApiContext;
use crate::routes::error::GalleryError;
use axum::Json;
use axum::extract::{Path, State};
use vams_client::interfaces::MosaicData;

/// Get a mosaic layout by title, selected-image properties normalized.
#[utoipa::path(
    get,
    path = "/mosaics/{title}",
    tag = "Mosaics",
    params(
        ("title" = String, Path, description = "The mosaic title.")
    ),
    responses(
        (status = 200, description = "The mosaic and its items.", body = MosaicData),
        (status = 404, description = "Mosaic not found."),
        (status = 502, description = "The album service could not be reached."),
    )
)]
pub async fn get_mosaic_handler(
    State(context): State<ApiContext>,
    Path(title): Path<String>,
) -> Result<Json<MosaicData>, GalleryError> {
    let data = context.vams.fetch_mosaic_by_title(&title).await?;
    Ok(Json(data))
}
