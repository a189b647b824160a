//! Error types for Munadi

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Configuration Errors
    #[error("DiscordWebhook is not set in the plugin configuration")]
    MissingWebhook,

    #[error("Invalid value for DiscordEvents: {0:?} (must be blank, \"threads\" or \"replies\")")]
    InvalidEventFilter(String),

    #[error("Invalid integer in DiscordForums: {0:?}")]
    InvalidForumFilter(String),

    #[error("Invalid value for DiscordStyle: {0:?} (must be blank, \"embed\" or \"plain\")")]
    InvalidPayloadStyle(String),

    // Resolution Errors
    #[error("The specified topic does not exist: {0}")]
    NoSuchTopic(i64),

    #[error("The specified reply does not exist: {0}")]
    NoSuchReply(i64),

    #[error("The specified user does not exist: {0}")]
    NoSuchUser(i64),

    #[error("Backing store error: {0}")]
    StoreError(String),

    // Delivery Errors
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Webhook request failed: {0}")]
    Delivery(String),

    #[error("Webhook returned error status {status}: {body}")]
    WebhookStatus { status: u16, body: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// True for errors that are surfaced to the host at setup time.
    /// Everything else stays local to a single dispatch.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingWebhook
                | Error::InvalidEventFilter(_)
                | Error::InvalidForumFilter(_)
                | Error::InvalidPayloadStyle(_)
        )
    }
}
