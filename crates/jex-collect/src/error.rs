use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("http request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("invalid status document from {url}: {reason}")]
    InvalidDocument { url: String, reason: String },
}
