use crate::domain::entities::finding::{Finding, PerfMetric};
use crate::domain::entities::node::{NodeStatus, ResourceUsage};
use crate::domain::value_objects::byte_unit::{fmt_value, round1, round2};
use crate::domain::value_objects::thresholds::ThresholdPair;

/// Which node-status section a memory-style check reads. The rule is
/// identical for both; only the section and the label differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryKind {
    Memory,
    Swap,
}

impl MemoryKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Swap => "swap",
        }
    }

    const fn section(self, status: &NodeStatus) -> &ResourceUsage {
        match self {
            Self::Memory => &status.memory,
            Self::Swap => &status.swap,
        }
    }
}

/// Grades memory or swap usage. Counters are reported in GB at one decimal
/// and the percentage derives from those displayed values; a zero total
/// falls back to a divisor of 1 so the check never divides by zero.
pub fn evaluate(kind: MemoryKind, status: &NodeStatus, thresholds: &ThresholdPair) -> Vec<Finding> {
    let usage = kind.section(status);
    let used_gb = round1(usage.used as f64 / 1_073_741_824.0);
    let total_gb = round1(usage.total as f64 / 1_073_741_824.0);
    let percent = if total_gb == 0.0 {
        round2(used_gb * 100.0)
    } else {
        round2(used_gb / total_gb * 100.0)
    };
    let warn_gb = round2(total_gb / 100.0 * f64::from(thresholds.warning));
    let crit_gb = round2(total_gb / 100.0 * f64::from(thresholds.critical));

    let perf = PerfMetric {
        label: "usage".to_string(),
        value: format!("{}GB", fmt_value(used_gb)),
        warn: Some(fmt_value(warn_gb)),
        crit: Some(fmt_value(crit_gb)),
        min: Some("0".to_string()),
        max: Some(fmt_value(total_gb)),
    };
    let message = format!(
        "{} usage is {} % ({} GB / {} GB)!",
        kind.label(),
        fmt_value(percent),
        fmt_value(used_gb),
        fmt_value(total_gb),
    );
    vec![Finding::new(thresholds.grade_usage(percent), kind.label(), message).with_perf(vec![perf])]
}
