use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub api: ApiSettings,
    pub vams: RawVamsSettings,
    pub contact: ContactSettings,
    pub logging: LoggingSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
    pub public_url: String,
}

/// Connection details for the upstream VAMS album service.
#[derive(Debug, Deserialize, Clone)]
pub struct RawVamsSettings {
    /// Base URL of the album API, e.g. `https://vams.example.com/api`.
    pub base_url: String,
    /// Optional key sent as the `X-API-Key` header.
    pub api_key: Option<String>,
}

/// Which downstream the contact form is relayed to.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContactProvider {
    /// Automation webhook (Zapier-style), receives the raw submission as JSON.
    Webhook,
    /// SendGrid plain transactional mail.
    Sendgrid,
    /// SendGrid dynamic-template mail.
    SendgridTemplate,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactSettings {
    pub provider: ContactProvider,
    /// Required when `provider` is `webhook`.
    pub webhook_url: Option<String>,
    /// Required when `provider` is `sendgrid` or `sendgrid_template`.
    pub sendgrid: Option<SendgridSettings>,
    /// Site name stamped into outgoing submissions.
    pub site_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SendgridSettings {
    pub api_key: String,
    /// Dynamic template id, required for the `sendgrid_template` provider.
    pub template_id: Option<String>,
    /// Must be a verified sender in SendGrid.
    pub from_email: String,
    pub to_email: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}
