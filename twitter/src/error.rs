use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwitterError {
    #[error("twitter rejected the credentials: {0}")]
    Authorization(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("rate limit hit, resets in {reset_in:?}")]
    RateLimited { reset_in: Option<Duration> },

    #[error("twitter api error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unable to sign request: {0}")]
    OAuth(String),

    #[error("unable to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unable to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
