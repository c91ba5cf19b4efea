use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("{0} is not configured")]
    Unconfigured(&'static str),

    /// The provider answered with a non-2xx status.
    #[error("Delivery failed with status {status}: {body}")]
    Delivery { status: u16, body: String },

    #[error("Delivery request failed")]
    Transport(#[from] reqwest::Error),
}
