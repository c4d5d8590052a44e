use std::time::Duration;

use async_trait::async_trait;

use jex_model::{ExecutorStatus, NodeStatus};

use crate::error::CollectError;
use crate::source::StatusSource;

/// Request timeout on the shared client. The upstream has no contractual
/// latency bound; with sequential fetches the worst-case cycle latency is
/// this value times the number of targets.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP fetcher for `<target>/computer/api/json`.
pub struct StatusFetcher {
    client: reqwest::Client,
}

impl StatusFetcher {
    pub fn new() -> Result<Self, CollectError> {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, CollectError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl StatusSource for StatusFetcher {
    async fn fetch(&self, target: &str) -> Result<Vec<NodeStatus>, CollectError> {
        let url = format!("{}/computer/api/json", target);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;

        let status: ExecutorStatus =
            serde_json::from_str(&body).map_err(|e| CollectError::InvalidDocument {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        Ok(status.computer)
    }
}
