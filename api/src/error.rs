use reqwest::StatusCode;
use thiserror::Error;

/// Anything that keeps a poll from producing a request list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch requests (HTTP {0})")]
    Status(StatusCode),
    #[error("Failed to fetch requests: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to decode requests: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid echo server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
