use serde::{Deserialize, Serialize};

/// One entry of `nodes/{node}/storage`. Disabled or inactive storages omit
/// the usage counters, so those default to zero instead of failing the
/// whole decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEntry {
    pub storage: String,
    pub enabled: i64,
    #[serde(default)]
    pub active: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub used: u64,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_active_storage() {
        let json = r#"{
            "storage": "local-lvm",
            "enabled": 1,
            "active": 1,
            "type": "lvmthin",
            "used": 8000000000,
            "total": 10000000000,
            "avail": 2000000000,
            "content": "rootdir,images"
        }"#;
        let entry: StorageEntry = serde_json::from_str(json).expect("deserialize");
        assert_eq!(entry.storage, "local-lvm");
        assert_eq!(entry.used, 8_000_000_000);
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let json = r#"{"storage": "backup-nfs", "enabled": 1, "type": "nfs"}"#;
        let entry: StorageEntry = serde_json::from_str(json).expect("deserialize");
        assert_eq!(entry.active, 0);
        assert_eq!(entry.used, 0);
        assert_eq!(entry.total, 0);
    }
}
