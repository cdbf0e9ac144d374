use crate::domain::checks;
use crate::domain::checks::ceph_io::CephIoThresholds;
use crate::domain::checks::memory::MemoryKind;
use crate::domain::entities::ceph::{CephIoStatus, CephStatus};
use crate::domain::entities::cluster::ClusterEntry;
use crate::domain::entities::disk::DiskEntry;
use crate::domain::entities::finding::Finding;
use crate::domain::entities::node::NodeStatus;
use crate::domain::entities::service::ServiceEntry;
use crate::domain::entities::storage::StorageEntry;
use crate::domain::value_objects::storage_filter::StorageFilter;
use crate::domain::value_objects::thresholds::ThresholdPair;
use crate::infrastructure::api::client::{ApiError, PveClient};
use crate::infrastructure::api::endpoint::Endpoint;

/// A fully validated check request: the subcommand plus its configuration.
/// The closed enumeration is the single place a subcommand maps to an
/// endpoint and an evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    Cpu { thresholds: ThresholdPair },
    Memory { thresholds: ThresholdPair },
    Swap { thresholds: ThresholdPair },
    Pveversion,
    Cluster,
    Ceph,
    CephIo { thresholds: CephIoThresholds },
    DisksHealth { thresholds: ThresholdPair },
    Services,
    Storage {
        thresholds: ThresholdPair,
        filter: StorageFilter,
    },
}

impl Check {
    /// Endpoint this check queries.
    #[must_use]
    pub fn endpoint<'a>(&self, node: &'a str) -> Endpoint<'a> {
        match self {
            Self::Cpu { .. } | Self::Memory { .. } | Self::Swap { .. } | Self::Pveversion => {
                Endpoint::NodeStatus(node)
            }
            Self::Cluster => Endpoint::ClusterStatus,
            Self::Ceph => Endpoint::ClusterCephStatus,
            Self::CephIo { .. } => Endpoint::NodeCephStatus(node),
            Self::DisksHealth { .. } => Endpoint::NodeDisks(node),
            Self::Services => Endpoint::NodeServices(node),
            Self::Storage { .. } => Endpoint::NodeStorage(node),
        }
    }

    /// Fetches the payload for this check and runs the matching evaluator.
    pub async fn run(&self, client: &PveClient, node: &str) -> Result<Vec<Finding>, ApiError> {
        let endpoint = self.endpoint(node);
        match self {
            Self::Cpu { thresholds } => {
                let status: NodeStatus = client.get(&endpoint).await?;
                Ok(checks::cpu::evaluate(&status, thresholds))
            }
            Self::Memory { thresholds } => {
                let status: NodeStatus = client.get(&endpoint).await?;
                Ok(checks::memory::evaluate(MemoryKind::Memory, &status, thresholds))
            }
            Self::Swap { thresholds } => {
                let status: NodeStatus = client.get(&endpoint).await?;
                Ok(checks::memory::evaluate(MemoryKind::Swap, &status, thresholds))
            }
            Self::Pveversion => {
                let status: NodeStatus = client.get(&endpoint).await?;
                Ok(checks::version::evaluate(&status))
            }
            Self::Cluster => {
                let entries: Vec<ClusterEntry> = client.get(&endpoint).await?;
                Ok(checks::cluster::evaluate(&entries))
            }
            Self::Ceph => {
                let status: CephStatus = client.get(&endpoint).await?;
                Ok(checks::ceph_health::evaluate(&status))
            }
            Self::CephIo { thresholds } => {
                let status: CephIoStatus = client.get(&endpoint).await?;
                Ok(checks::ceph_io::evaluate(&status, thresholds))
            }
            Self::DisksHealth { thresholds } => {
                let disks: Vec<DiskEntry> = client.get(&endpoint).await?;
                Ok(checks::disks::evaluate(&disks, thresholds))
            }
            Self::Services => {
                let services: Vec<ServiceEntry> = client.get(&endpoint).await?;
                Ok(checks::services::evaluate(&services))
            }
            Self::Storage { thresholds, filter } => {
                let entries: Vec<StorageEntry> = client.get(&endpoint).await?;
                Ok(checks::storage::evaluate(&entries, thresholds, filter))
            }
        }
    }
}
