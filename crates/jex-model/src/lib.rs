mod target;
pub use target::parse_targets;

mod status;
pub use status::{ExecutorStatus, NodeStatus};
