use serde::{Deserialize, Serialize};

/// `cluster/ceph/status`, reduced to the health summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CephStatus {
    pub health: CephHealth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CephHealth {
    pub status: String,
}

/// `nodes/{node}/ceph/status`, reduced to the placement-group IO counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CephIoStatus {
    pub pgmap: PgMap,
}

/// An idle cluster omits the rate fields entirely, hence the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PgMap {
    #[serde(default)]
    pub read_bytes_sec: u64,
    #[serde(default)]
    pub write_bytes_sec: u64,
    #[serde(default)]
    pub read_op_per_sec: u64,
    #[serde(default)]
    pub write_op_per_sec: u64,
}
