//! Prometheus metrics backend for the executor status exporter.
//!
//! This crate provides [`NodeGauges`], the publisher holding the current
//! per-node gauge set fed by the poll loop and read by the scrape endpoint.
//!
//! ## Metrics
//! - `online_status{node, url}` - Gauge, 1 when the node is online
//! - `temporarily_offline_status{node, url}` - Gauge, 1 when temporarily offline
//! - `poll_cycles_total` - Counter, completed poll cycles
//!
//! This crate does NOT provide the HTTP server for the `/metrics` endpoint;
//! the daemon mounts [`NodeGauges::render`] behind its own axum route.

mod error;
pub use error::MetricsError;

mod sample;
pub use sample::GaugeSample;

mod gauges;
pub use gauges::{NodeGauges, ONLINE_STATUS, TEMPORARILY_OFFLINE_STATUS};

pub use prometheus::{Encoder, Registry, TextEncoder};
