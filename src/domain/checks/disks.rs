use crate::domain::entities::disk::DiskEntry;
use crate::domain::entities::finding::Finding;
use crate::domain::value_objects::check_state::CheckState;
use crate::domain::value_objects::thresholds::ThresholdPair;

/// SMART self-assessment values that do not indicate a failing disk.
const HEALTHY: [&str; 3] = ["OK", "PASSED", "UNKNOWN"];

const ALL_HEALTHY: &str = "All disks are healthy.";

/// Grades every physical disk: SMART health first, then wearout against the
/// descending thresholds. Healthy disks contribute a shared OK baseline that
/// the aggregator collapses into a single line.
pub fn evaluate(disks: &[DiskEntry], thresholds: &ThresholdPair) -> Vec<Finding> {
    let mut findings = Vec::new();
    for disk in disks {
        let label = format!(
            "{} - {} type: {} on {}",
            disk.vendor.trim(),
            disk.model,
            disk.kind,
            disk.devpath,
        );
        if !HEALTHY.contains(&disk.health.as_str()) {
            findings.push(Finding::new(
                CheckState::Warning,
                &disk.devpath,
                format!("{label} is failed: {}", disk.health),
            ));
            continue;
        }
        let wearout_state = disk
            .wearout_percent()
            .map(|wearout| (wearout, thresholds.grade_wearout(wearout)));
        match wearout_state {
            Some((wearout, state @ (CheckState::Warning | CheckState::Critical))) => {
                findings.push(Finding::new(
                    state,
                    &disk.devpath,
                    format!("{label} has low wearout: {wearout}"),
                ));
            }
            _ => findings.push(Finding::new(CheckState::Ok, "disks", ALL_HEALTHY)),
        }
    }
    findings
}
