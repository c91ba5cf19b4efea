use crate::routes::{albums, contact, mosaics, root};
use utoipa::OpenApi;
use vams_client::interfaces::{Album, AlbumData, AlbumImage, MosaicData, MosaicItem};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::health_check,
        // Album handlers
        albums::handlers::list_albums_handler,
        albums::handlers::get_album_handler,
        albums::handlers::get_album_by_title_handler,
        // Mosaic handlers
        mosaics::handlers::get_mosaic_handler,
        // Contact handlers
        contact::handlers::send_contact_handler,
    ),
    components(
        schemas(Album, AlbumData, AlbumImage, MosaicData, MosaicItem),
    ),
    tags(
        (name = "Albums", description = "Album browsing endpoints, proxied from the VAMS album API"),
        (name = "Mosaics", description = "Curated mosaic layout endpoints"),
        (name = "Contact", description = "Contact form relay"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
