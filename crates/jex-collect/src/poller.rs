use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use jex_metrics::NodeGauges;

use crate::source::StatusSource;

/// Drives the fetch -> publish cycle across all registered targets.
///
/// The poller is the only writer of the gauge set. In continuous mode it is
/// spawned as a background task at startup; the stop contract is process
/// termination.
pub struct Poller<S> {
    source: S,
    targets: Vec<String>,
    gauges: Arc<NodeGauges>,
}

impl<S> Poller<S>
where
    S: StatusSource,
{
    pub fn new(source: S, targets: Vec<String>, gauges: Arc<NodeGauges>) -> Self {
        Self {
            source,
            targets,
            gauges,
        }
    }

    /// Run one full cycle: fetch every target once, sequentially.
    ///
    /// A per-target failure is logged and skipped; it never aborts the cycle
    /// for the remaining targets and never surfaces to the caller.
    pub async fn run_cycle(&self) {
        for target in &self.targets {
            match self.source.fetch(target).await {
                Ok(nodes) => {
                    debug!(target = %target, nodes = nodes.len(), "published node statuses");
                    self.gauges.update(target, &nodes);
                }
                Err(e) => {
                    warn!(target = %target, "fetch failed: {}", e);
                }
            }
        }
        self.gauges.record_cycle();
    }

    /// Run the first cycle immediately, then repeat every `interval` until
    /// the process terminates.
    pub async fn run(self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }
}
