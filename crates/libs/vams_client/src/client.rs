use crate::error::VamsError;
use app_state::VamsSettings;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Client for the remote VAMS album service.
///
/// Holds a `reqwest::Client` with the JSON content negotiation headers and,
/// when configured, the `X-API-Key` header applied to every request.
#[derive(Clone)]
pub struct VamsClient {
    http_client: reqwest::Client,
    settings: VamsSettings,
}

impl VamsClient {
    pub fn new(settings: VamsSettings) -> Result<Self, VamsError> {
        if settings.base_url.is_empty() {
            return Err(VamsError::Unconfigured);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &settings.api_key {
            match HeaderValue::from_str(api_key) {
                Ok(value) => {
                    headers.insert("X-API-Key", value);
                }
                Err(_) => warn!("Configured VAMS API key is not a valid header value, ignoring"),
            }
        }

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            settings,
        })
    }

    /// Perform a GET against the album API and unwrap the response envelope.
    pub async fn fetch_api<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, VamsError> {
        let url = if endpoint.starts_with('/') {
            format!("{}{}", self.settings.base_url, endpoint)
        } else {
            format!("{}/{}", self.settings.base_url, endpoint)
        };

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VamsError::Status {
                status: status.as_u16(),
                message: status_message(status, &body),
            });
        }

        let body: Value = response.json().await?;
        Ok(serde_json::from_value(unwrap_envelope(body))?)
    }

    /// Try the primary endpoint and, on any failure, the fallback exactly
    /// once. A fallback failure propagates.
    pub async fn fetch_with_fallback<T: DeserializeOwned>(
        &self,
        primary: &str,
        fallback: &str,
    ) -> Result<T, VamsError> {
        match self.fetch_api(primary).await {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!("Primary endpoint failed ({primary}), trying fallback ({fallback}): {err}");
                self.fetch_api(fallback).await
            }
        }
    }
}

/// Unwrap the `{data: {data: T}}` envelope the album API sometimes nests
/// payloads inside: `data.data` first, then `data`, else the raw body.
#[must_use]
pub fn unwrap_envelope(mut value: Value) -> Value {
    if let Some(data) = value.get_mut("data") {
        if !data.is_null() {
            if let Some(inner) = data.get_mut("data") {
                if !inner.is_null() {
                    return inner.take();
                }
            }
            return data.take();
        }
    }
    value
}

/// Fixed status-to-message table for upstream errors.
fn status_message(status: StatusCode, body: &str) -> String {
    match status.as_u16() {
        404 => "Resource not found".to_string(),
        401 => "Authentication failed. Please check your API key.".to_string(),
        403 => "Access forbidden. You may not have permission to access this resource.".to_string(),
        429 => "Rate limit exceeded. Please try again later.".to_string(),
        422 => "Validation error. Please check your request data.".to_string(),
        code if code >= 500 => "Server error. Please try again later.".to_string(),
        _ => {
            if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.to_string()
            }
        }
    }
}
