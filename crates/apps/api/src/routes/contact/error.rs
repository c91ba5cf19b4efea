use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notify::NotifyError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Delivery failed")]
    Delivery(#[from] NotifyError),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                let body = Json(json!({
                    "error": "Validation failed",
                    "fields": errors,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            // Delivery failures are never masked as success.
            Self::Delivery(err) => {
                error!("Contact delivery failed: {err}");
                let body = Json(json!({
                    "error": "Failed to send email. Please try again or contact directly.",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
