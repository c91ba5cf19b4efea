use crate::{ContactMessage, Notifier, NotifyError};
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

/// Relays submissions to an automation webhook (Zapier-style) as a JSON POST.
pub struct WebhookNotifier {
    http_client: reqwest::Client,
    webhook_url: String,
    site_name: String,
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    name: &'a str,
    email: &'a str,
    subject: String,
    message: &'a str,
    timestamp: String,
    source: &'a str,
}

impl WebhookNotifier {
    #[must_use]
    pub fn new(http_client: reqwest::Client, webhook_url: String, site_name: String) -> Self {
        Self {
            http_client,
            webhook_url,
            site_name,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        let payload = WebhookPayload {
            name: &message.name,
            email: &message.email,
            subject: message.subject_or_default(&self.site_name),
            message: &message.message,
            timestamp: Utc::now().to_rfc3339(),
            source: &self.site_name,
        };

        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        info!("Contact submission forwarded to webhook");
        Ok(())
    }
}
