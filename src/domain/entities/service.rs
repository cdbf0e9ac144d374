use serde::{Deserialize, Serialize};

/// One entry of `nodes/{node}/services`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub desc: String,
    pub state: String,
    #[serde(rename = "unit-state", default)]
    pub unit_state: String,
    #[serde(rename = "active-state", default)]
    pub active_state: String,
}
