use thiserror::Error;

#[derive(Debug, Error)]
pub enum VamsError {
    #[error("VAMS base URL is not configured. Check the APP__VAMS__BASE_URL environment variable.")]
    Unconfigured,

    /// Non-2xx response from the album API, with its status mapped to a
    /// human-readable message.
    #[error("API Error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Request to the album API failed")]
    Transport(#[from] reqwest::Error),

    #[error("Could not decode album API response")]
    Decode(#[from] serde_json::Error),
}

impl VamsError {
    /// The upstream HTTP status, when the error carries one.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
