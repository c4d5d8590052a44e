use async_trait::async_trait;

use jex_model::NodeStatus;

use crate::error::CollectError;

/// Source of executor status documents.
///
/// This trait abstracts the HTTP fetcher so the poller can be driven by
/// test doubles as well as the real [`crate::StatusFetcher`].
#[async_trait]
pub trait StatusSource: Send + Sync + 'static {
    /// Fetch and decode the current node statuses of one target.
    ///
    /// Transport and decode failures are both errors; no retry happens
    /// inside the call. Retry is the next scheduled poll cycle.
    async fn fetch(&self, target: &str) -> Result<Vec<NodeStatus>, CollectError>;
}
