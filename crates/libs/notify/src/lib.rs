#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Contact-form delivery. One [`Notifier`] implementation is selected from
//! configuration at startup; the providers are alternatives, never composed.

mod error;
mod message;
mod sendgrid;
mod webhook;

pub use error::NotifyError;
pub use message::ContactMessage;
pub use sendgrid::{SendgridNotifier, TemplateNotifier};
pub use webhook::WebhookNotifier;

use app_state::{ContactProvider, ContactSettings};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Forward one contact submission to the downstream provider.
    async fn send(&self, message: &ContactMessage) -> Result<(), NotifyError>;
}

/// Build the configured notifier. Missing credentials for the selected
/// provider are a startup error, not a per-request one.
pub fn build_notifier(
    http_client: reqwest::Client,
    settings: &ContactSettings,
) -> Result<Arc<dyn Notifier>, NotifyError> {
    if let Some(key) = settings.missing_credential() {
        return Err(NotifyError::Unconfigured(key));
    }

    Ok(match settings.provider {
        ContactProvider::Webhook => {
            let webhook_url = settings
                .webhook_url
                .clone()
                .ok_or(NotifyError::Unconfigured("contact.webhook_url"))?;
            Arc::new(WebhookNotifier::new(
                http_client,
                webhook_url,
                settings.site_name.clone(),
            ))
        }
        ContactProvider::Sendgrid => {
            let sendgrid = settings
                .sendgrid
                .clone()
                .ok_or(NotifyError::Unconfigured("contact.sendgrid"))?;
            Arc::new(SendgridNotifier::new(
                http_client,
                sendgrid,
                settings.site_name.clone(),
            ))
        }
        ContactProvider::SendgridTemplate => {
            let sendgrid = settings
                .sendgrid
                .clone()
                .ok_or(NotifyError::Unconfigured("contact.sendgrid"))?;
            Arc::new(TemplateNotifier::new(
                http_client,
                sendgrid,
                settings.site_name.clone(),
            )?)
        }
    })
}
