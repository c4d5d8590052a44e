use std::{
    collections::BTreeMap,
    sync::RwLock,
};

use prometheus::{Encoder, GaugeVec, IntCounter, Opts, Registry, TextEncoder};

use jex_model::NodeStatus;

use crate::{GaugeSample, MetricsError};

pub const ONLINE_STATUS: &str = "online_status";
pub const TEMPORARILY_OFFLINE_STATUS: &str = "temporarily_offline_status";

/// Current gauge set published by the exporter.
///
/// The poll loop is the only writer ([`NodeGauges::update`]); the scrape
/// path only reads ([`NodeGauges::snapshot`], [`NodeGauges::render`]). The
/// inner lock is held across a full per-target batch so a concurrent scrape
/// observes either the prior or the current cycle, never a mix.
///
/// Samples are never evicted: a node that disappears from a later document,
/// or a target that stops responding, keeps its last published value until
/// the process exits.
pub struct NodeGauges {
    registry: Registry,
    online: GaugeVec,
    temporarily_offline: GaugeVec,
    poll_cycles: IntCounter,
    samples: RwLock<BTreeMap<(String, String, String), f64>>,
}

impl NodeGauges {
    /// Create the gauge set with its own registry.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let online = GaugeVec::new(
            Opts::new(ONLINE_STATUS, "whether a node is online"),
            &["node", "url"],
        )?;
        let temporarily_offline = GaugeVec::new(
            Opts::new(
                TEMPORARILY_OFFLINE_STATUS,
                "whether a node is temporarily offline",
            ),
            &["node", "url"],
        )?;
        let poll_cycles = IntCounter::new("poll_cycles_total", "completed poll cycles")?;

        registry.register(Box::new(online.clone()))?;
        registry.register(Box::new(temporarily_offline.clone()))?;
        registry.register(Box::new(poll_cycles.clone()))?;

        Ok(Self {
            registry,
            online,
            temporarily_offline,
            poll_cycles,
            samples: RwLock::new(BTreeMap::new()),
        })
    }

    /// Publish the decoded node statuses from one fetch of `url`.
    ///
    /// Sets `online_status` and `temporarily_offline_status` for every
    /// reported node. The whole batch applies under one write lock.
    pub fn update(&self, url: &str, nodes: &[NodeStatus]) {
        let mut samples = self.samples.write().unwrap();

        for node in nodes {
            let online = node.online_value();
            let temp = node.temporarily_offline_value();

            self.online
                .with_label_values(&[&node.display_name, url])
                .set(online);
            self.temporarily_offline
                .with_label_values(&[&node.display_name, url])
                .set(temp);

            samples.insert(
                key(ONLINE_STATUS, &node.display_name, url),
                online,
            );
            samples.insert(
                key(TEMPORARILY_OFFLINE_STATUS, &node.display_name, url),
                temp,
            );
        }
    }

    /// Mark one full poll cycle as completed.
    pub fn record_cycle(&self) {
        self.poll_cycles.inc();
    }

    /// Completed poll cycles so far.
    pub fn cycles(&self) -> u64 {
        self.poll_cycles.get()
    }

    /// The current full gauge set, ordered by (metric, node, url).
    pub fn snapshot(&self) -> Vec<GaugeSample> {
        let samples = self.samples.read().unwrap();

        samples
            .iter()
            .map(|((metric, node, url), value)| GaugeSample {
                metric: metric.clone(),
                node: node.clone(),
                url: url.clone(),
                value: *value,
            })
            .collect()
    }

    /// Render the registry in Prometheus text exposition format.
    pub fn render(&self) -> Result<String, MetricsError> {
        // Read lock keeps a concurrent update from landing mid-encode.
        let _samples = self.samples.read().unwrap();

        let encoder = TextEncoder::new();
        let families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&families, &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| MetricsError::Encoding(e.to_string()))
    }
}

fn key(metric: &str, node: &str, url: &str) -> (String, String, String) {
    (metric.to_string(), node.to_string(), url.to_string())
}
