use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("notification endpoint answered {0}")]
    Status(u16),

    #[error("notification timed out after {0:?}")]
    Timeout(Duration),
}
