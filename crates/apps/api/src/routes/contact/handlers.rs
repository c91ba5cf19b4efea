use crate::api_state::ApiContext;
use crate::routes::contact::error::ContactError;
use crate::routes::contact::interfaces::{ContactRequest, ContactResponse};
use axum::Json;
use axum::extract::State;
use notify::ContactMessage;
use tracing::info;
use validator::Validate;

/// Relay a contact-form submission to the configured email provider.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submission forwarded.", body = ContactResponse),
        (status = 400, description = "Validation failed, with field-level detail."),
        (status = 500, description = "The delivery provider rejected the submission."),
    )
)]
pub async fn send_contact_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ContactError> {
    payload.validate()?;

    let message = ContactMessage {
        name: payload.name,
        email: payload.email,
        message: payload.message,
        subject: payload.subject,
    }
    .trimmed();

    context.notifier.send(&message).await?;
    info!("Contact form submission relayed");

    Ok(Json(ContactResponse {
        success: true,
        message: "Email sent successfully!".to_string(),
    }))
}
