use crate::domain::entities::finding::{Finding, PerfMetric};
use crate::domain::entities::storage::StorageEntry;
use crate::domain::value_objects::byte_unit::{fmt_value, round2, scale, scale_pair};
use crate::domain::value_objects::check_state::CheckState;
use crate::domain::value_objects::storage_filter::StorageFilter;
use crate::domain::value_objects::thresholds::ThresholdPair;

/// Grades usage of every selected storage. Disabled entries are skipped
/// entirely, inactive ones warn without usage figures. The human-readable
/// part shows used and total in their own digit-length units while the
/// perfdata block uses the shared pair unit, with the thresholds rescaled
/// from percent to that unit.
pub fn evaluate(
    entries: &[StorageEntry],
    thresholds: &ThresholdPair,
    filter: &StorageFilter,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    for entry in entries {
        if !filter.selects(&entry.storage) || entry.enabled != 1 {
            continue;
        }
        if entry.active != 1 {
            findings.push(Finding::new(
                CheckState::Warning,
                &entry.storage,
                format!("{} disk is not active!", entry.storage),
            ));
            continue;
        }

        let percent = if entry.total == 0 {
            round2(entry.used as f64 * 100.0)
        } else {
            round2(entry.used as f64 / entry.total as f64 * 100.0)
        };
        let (used, used_unit) = scale(entry.used);
        let (total, total_unit) = scale(entry.total);
        let (pair_used, pair_total, pair_unit) = scale_pair(entry.used, entry.total);
        let warn_scaled = round2(total / 100.0 * f64::from(thresholds.warning));
        let crit_scaled = round2(total / 100.0 * f64::from(thresholds.critical));

        let perf = PerfMetric {
            label: entry.storage.clone(),
            value: format!("{}{}", fmt_value(pair_used), pair_unit),
            warn: Some(fmt_value(warn_scaled)),
            crit: Some(fmt_value(crit_scaled)),
            min: Some("0".to_string()),
            max: Some(fmt_value(pair_total)),
        };
        let message = format!(
            "{} disk usage (type: {}) is {} % ({} {} / {} {}).",
            entry.storage,
            entry.kind,
            fmt_value(percent),
            fmt_value(used),
            used_unit,
            fmt_value(total),
            total_unit,
        );
        findings.push(
            Finding::new(thresholds.grade_usage(percent), &entry.storage, message)
                .with_perf(vec![perf]),
        );
    }
    findings
}
