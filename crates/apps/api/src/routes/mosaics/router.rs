use crate::api_state::ApiContext;
use crate::routes::mosaics::handlers::get_mosaic_handler;
use axum::{Router, routing::get};

pub fn mosaics_public_router() -> Router<ApiContext> {
    Router::new().route("/mosaics/{title}", get(get_mosaic_handler))
}
