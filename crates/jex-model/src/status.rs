use serde::Deserialize;

/// Executor status document served by `<target>/computer/api/json`.
///
/// Unknown fields are ignored; a missing `computer` array decodes as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutorStatus {
    #[serde(default)]
    pub computer: Vec<NodeStatus>,
}

/// Per-node state decoded from one fetch of a target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    pub display_name: String,
    pub offline: bool,
    /// Absent in some server versions; absent behaves as `false`.
    #[serde(default)]
    pub temporarily_offline: bool,
}

impl NodeStatus {
    /// Gauge value for `online_status`: 1 when the node is online.
    pub fn online_value(&self) -> f64 {
        if self.offline { 0.0 } else { 1.0 }
    }

    /// Gauge value for `temporarily_offline_status`.
    pub fn temporarily_offline_value(&self) -> f64 {
        if self.temporarily_offline { 1.0 } else { 0.0 }
    }
}
