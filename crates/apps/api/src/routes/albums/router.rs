use crate::api_state::ApiContext;
use crate::routes::albums::handlers::{
    get_album_by_title_handler, get_album_handler, list_albums_handler,
};
use axum::{Router, routing::get};

pub fn albums_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/albums", get(list_albums_handler))
        .route("/albums/by-title/{title}", get(get_album_by_title_handler))
        .route("/albums/{album_id}", get(get_album_handler))
}
