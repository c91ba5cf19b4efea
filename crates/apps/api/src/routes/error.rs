use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;
use vams_client::VamsError;

/// Errors surfaced by the album/mosaic proxy routes.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error(transparent)]
    Vams(#[from] VamsError),
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Upstream HTTP errors keep their status and mapped message.
            Self::Vams(VamsError::Status { status, message }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            Self::Vams(VamsError::Unconfigured) => {
                error!("Album API called without a configured base URL");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The album service is not configured.".to_string(),
                )
            }
            Self::Vams(err @ (VamsError::Transport(_) | VamsError::Decode(_))) => {
                error!("Album API request failed: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The album service could not be reached.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
