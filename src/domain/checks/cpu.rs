use crate::domain::entities::finding::{Finding, PerfMetric};
use crate::domain::entities::node::NodeStatus;
use crate::domain::value_objects::byte_unit::{fmt_value, round2};
use crate::domain::value_objects::thresholds::ThresholdPair;

/// Grades node CPU usage against the configured thresholds.
pub fn evaluate(status: &NodeStatus, thresholds: &ThresholdPair) -> Vec<Finding> {
    let usage = round2(status.cpu * 100.0);
    let rendered = fmt_value(usage);
    let perf = PerfMetric {
        label: "usage".to_string(),
        value: format!("{rendered}%"),
        warn: Some(thresholds.warning.to_string()),
        crit: Some(thresholds.critical.to_string()),
        min: Some("0".to_string()),
        max: Some("100".to_string()),
    };
    vec![Finding::new(
        thresholds.grade_usage(usage),
        "cpu",
        format!("CPU usage is {rendered} %."),
    )
    .with_perf(vec![perf])]
}
