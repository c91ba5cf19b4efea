use crate::{ContactMessage, Notifier, NotifyError};
use app_state::SendgridSettings;
use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Serialize)]
struct MailAddress<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<MailAddress<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dynamic_template_data: Option<TemplateData<'a>>,
}

/// Field names match the SendGrid dynamic template the site was built with.
#[derive(Debug, Serialize)]
struct TemplateData<'a> {
    #[serde(rename = "contactPersonName")]
    contact_person_name: &'a str,
    #[serde(rename = "contactPersonEmail")]
    contact_person_email: &'a str,
    message: &'a str,
    sitename: &'a str,
}

#[derive(Debug, Serialize)]
struct MailContent<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: String,
}

#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: MailAddress<'a>,
    subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<Vec<MailContent<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template_id: Option<&'a str>,
}

async fn post_mail(
    http_client: &reqwest::Client,
    api_key: &str,
    request: &MailSendRequest<'_>,
) -> Result<(), NotifyError> {
    let response = http_client
        .post(SENDGRID_SEND_URL)
        .bearer_auth(api_key)
        .json(request)
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
    Ok(())
}

/// Plain transactional mail via the SendGrid v3 API.
pub struct SendgridNotifier {
    http_client: reqwest::Client,
    settings: SendgridSettings,
    site_name: String,
}

impl SendgridNotifier {
    #[must_use]
    pub fn new(http_client: reqwest::Client, settings: SendgridSettings, site_name: String) -> Self {
        Self {
            http_client,
            settings,
            site_name,
        }
    }
}

#[async_trait]
impl Notifier for SendgridNotifier {
    async fn send(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        let body = format!(
            "From: {} <{}>\n\n{}",
            message.name, message.email, message.message
        );
        let request = MailSendRequest {
            personalizations: vec![Personalization {
                to: vec![MailAddress {
                    email: &self.settings.to_email,
                }],
                dynamic_template_data: None,
            }],
            from: MailAddress {
                email: &self.settings.from_email,
            },
            subject: format!("{} email contactform", self.site_name),
            content: Some(vec![MailContent {
                content_type: "text/plain",
                value: body,
            }]),
            template_id: None,
        };

        post_mail(&self.http_client, &self.settings.api_key, &request).await?;
        info!("Contact submission sent via SendGrid");
        Ok(())
    }
}

/// Dynamic-template mail via the SendGrid v3 API.
pub struct TemplateNotifier {
    http_client: reqwest::Client,
    settings: SendgridSettings,
    template_id: String,
    site_name: String,
}

impl TemplateNotifier {
    pub fn new(
        http_client: reqwest::Client,
        settings: SendgridSettings,
        site_name: String,
    ) -> Result<Self, NotifyError> {
        let template_id = settings
            .template_id
            .clone()
            .ok_or(NotifyError::Unconfigured("contact.sendgrid.template_id"))?;
        Ok(Self {
            http_client,
            settings,
            template_id,
            site_name,
        })
    }
}

#[async_trait]
impl Notifier for TemplateNotifier {
    async fn send(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        let request = MailSendRequest {
            personalizations: vec![Personalization {
                to: vec![MailAddress {
                    email: &self.settings.to_email,
                }],
                dynamic_template_data: Some(TemplateData {
                    contact_person_name: &message.name,
                    contact_person_email: &message.email,
                    message: &message.message,
                    sitename: &self.site_name,
                }),
            }],
            from: MailAddress {
                email: &self.settings.from_email,
            },
            subject: format!("{} email contactform", self.site_name),
            content: None,
            template_id: Some(&self.template_id),
        };

        post_mail(&self.http_client, &self.settings.api_key, &request).await?;
        info!("Contact submission sent via SendGrid template");
        Ok(())
    }
}
