/// API paths under `/api2/json/`, one per thing the probe can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    NodeStatus(&'a str),
    NodeDisks(&'a str),
    ClusterCephStatus,
    NodeCephStatus(&'a str),
    ClusterStatus,
    NodeStorage(&'a str),
    NodeServices(&'a str),
    AccessTicket,
}

impl Endpoint<'_> {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::NodeStatus(node) => format!("nodes/{node}/status"),
            Self::NodeDisks(node) => format!("nodes/{node}/disks/list"),
            Self::ClusterCephStatus => "cluster/ceph/status".to_string(),
            Self::NodeCephStatus(node) => format!("nodes/{node}/ceph/status"),
            Self::ClusterStatus => "cluster/status".to_string(),
            Self::NodeStorage(node) => format!("nodes/{node}/storage"),
            Self::NodeServices(node) => format!("nodes/{node}/services"),
            Self::AccessTicket => "access/ticket".to_string(),
        }
    }
}
