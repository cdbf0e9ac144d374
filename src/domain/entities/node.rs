use serde::{Deserialize, Serialize};

/// Subset of `nodes/{node}/status` the probe consumes. One fetch serves the
/// cpu, memory, swap and pveversion checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    /// CPU usage as a fraction of all cores (0.0–1.0).
    pub cpu: f64,
    pub memory: ResourceUsage,
    pub swap: ResourceUsage,
    /// Slash-separated package/version/release string.
    pub pveversion: String,
}

/// Used/total byte counters shared by the memory and swap sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub used: u64,
    pub total: u64,
}
