use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `nodes/{node}/disks/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskEntry {
    /// May be absent on NVMe devices.
    #[serde(default)]
    pub vendor: String,
    pub model: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub devpath: String,
    pub health: String,
    /// Integer percentage of remaining endurance, or the string "N/A" on
    /// disks that do not report it.
    #[serde(default)]
    pub wearout: Value,
}

impl DiskEntry {
    /// The wearout value when the disk actually reports one.
    #[must_use]
    pub fn wearout_percent(&self) -> Option<i64> {
        self.wearout.as_i64()
    }
}
