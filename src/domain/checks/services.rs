use crate::domain::entities::finding::Finding;
use crate::domain::entities::service::ServiceEntry;
use crate::domain::value_objects::check_state::CheckState;

const ALL_RUNNING: &str = "All services are running.";

/// Flags services that are neither running nor active. Units systemd does
/// not know (`not-found`) are skipped; healthy services contribute a shared
/// OK baseline that the aggregator collapses into a single line.
pub fn evaluate(services: &[ServiceEntry]) -> Vec<Finding> {
    services
        .iter()
        .map(|service| {
            if service.state != "running"
                && service.active_state != "active"
                && service.unit_state != "not-found"
            {
                Finding::new(
                    CheckState::Warning,
                    &service.name,
                    format!("{} ({}) is {}.", service.desc, service.name, service.state),
                )
            } else {
                Finding::new(CheckState::Ok, "services", ALL_RUNNING)
            }
        })
        .collect()
}
