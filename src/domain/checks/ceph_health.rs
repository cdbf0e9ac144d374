use crate::domain::entities::ceph::CephStatus;
use crate::domain::entities::finding::Finding;
use crate::domain::value_objects::check_state::CheckState;

/// Anything but HEALTH_OK (HEALTH_WARN, HEALTH_ERR) grades WARNING.
pub fn evaluate(status: &CephStatus) -> Vec<Finding> {
    if status.health.status == "HEALTH_OK" {
        vec![Finding::new(
            CheckState::Ok,
            "ceph",
            "CEPH cluster is healthy.",
        )]
    } else {
        vec![Finding::new(
            CheckState::Warning,
            "ceph",
            "CEPH cluster is unhealthy!",
        )]
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn make_status(health: &str) -> CephStatus {
        serde_json::from_str(&format!(r#"{{"health": {{"status": "{health}"}}}}"#))
            .expect("status")
    }

    #[test]
    fn health_ok_is_ok() {
        let findings = evaluate(&make_status("HEALTH_OK"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].state, CheckState::Ok);
        assert_eq!(findings[0].message, "CEPH cluster is healthy.");
    }

    #[test]
    fn health_warn_is_warning() {
        let findings = evaluate(&make_status("HEALTH_WARN"));
        assert_eq!(findings[0].state, CheckState::Warning);
        assert_eq!(findings[0].message, "CEPH cluster is unhealthy!");
    }

    #[test]
    fn health_err_is_warning() {
        let findings = evaluate(&make_status("HEALTH_ERR"));
        assert_eq!(findings[0].state, CheckState::Warning);
    }
}
