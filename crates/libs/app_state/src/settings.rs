use crate::{ApiSettings, ContactProvider, ContactSettings, LoggingSettings, RawSettings, RawVamsSettings};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub vams: VamsSettings,
    pub contact: ContactSettings,
    pub logging: LoggingSettings,
}

/// Normalized VAMS connection settings. The base URL never carries a
/// trailing slash so endpoint paths can be appended directly.
#[derive(Debug, Deserialize, Clone)]
pub struct VamsSettings {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl From<RawVamsSettings> for VamsSettings {
    fn from(raw: RawVamsSettings) -> Self {
        Self {
            base_url: raw.base_url.trim_end_matches('/').to_string(),
            api_key: raw.api_key.filter(|k| !k.is_empty()),
        }
    }
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        Self {
            api: raw.api,
            vams: raw.vams.into(),
            contact: raw.contact,
            logging: raw.logging,
        }
    }
}

impl ContactSettings {
    /// Checks that the credentials for the selected provider are present.
    /// Called once at startup; a missing credential is fatal.
    pub fn missing_credential(&self) -> Option<&'static str> {
        match self.provider {
            ContactProvider::Webhook => {
                if self.webhook_url.as_deref().is_none_or(str::is_empty) {
                    return Some("contact.webhook_url");
                }
            }
            ContactProvider::Sendgrid => {
                if self.sendgrid.is_none() {
                    return Some("contact.sendgrid");
                }
            }
            ContactProvider::SendgridTemplate => {
                let Some(sendgrid) = &self.sendgrid else {
                    return Some("contact.sendgrid");
                };
                if sendgrid.template_id.as_deref().is_none_or(str::is_empty) {
                    return Some("contact.sendgrid.template_id");
                }
            }
        }
        None
    }
}
