use serde::{Deserialize, Serialize};

/// One entry of `cluster/status`. The first element summarizes the cluster
/// itself (name, quorum), subsequent elements describe individual nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterEntry {
    #[serde(default)]
    pub name: String,
    /// 1 when the cluster has quorum, 0 when it lost it, absent on
    /// standalone nodes without a cluster configuration.
    #[serde(default)]
    pub quorate: Option<i64>,
    #[serde(default)]
    pub online: Option<i64>,
    #[serde(default)]
    pub ip: Option<String>,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_summary_and_nodes() {
        let json = r#"[
            {"type": "cluster", "name": "prod", "quorate": 1, "nodes": 3},
            {"type": "node", "name": "pve1", "online": 1, "ip": "10.0.0.1"},
            {"type": "node", "name": "pve2", "online": 0, "ip": "10.0.0.2"}
        ]"#;
        let entries: Vec<ClusterEntry> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(entries[0].quorate, Some(1));
        assert_eq!(entries[1].online, Some(1));
        assert_eq!(entries[2].online, Some(0));
        assert!(entries[1].quorate.is_none());
    }
}
