pub mod albums;
mod api_doc;
pub mod contact;
pub mod error;
pub mod mosaics;
pub mod root;

use crate::api_state::ApiContext;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", api_doc::ApiDoc::openapi()))
        .merge(root::router::root_public_router())
        .merge(albums::router::albums_public_router())
        .merge(mosaics::router::mosaics_public_router())
        .merge(contact::router::contact_public_router())
        .with_state(api_state)
}
