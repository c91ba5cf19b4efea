use crate::api_state::ApiContext;
use crate::routes::contact::handlers::send_contact_handler;
use axum::{Router, routing::post};

pub fn contact_public_router() -> Router<ApiContext> {
    Router::new().route("/contact", post(send_contact_handler))
}
