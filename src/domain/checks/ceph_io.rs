use crate::domain::entities::ceph::CephIoStatus;
use crate::domain::entities::finding::{Finding, PerfMetric};
use crate::domain::value_objects::byte_unit::{fmt_value, round2};
use crate::domain::value_objects::check_state::CheckState;

/// Warning bounds for the two CEPH IO findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CephIoThresholds {
    /// Operations per second, either direction.
    pub io_warning: u64,
    /// Throughput in MB per second, either direction.
    pub byte_warning: u64,
}

impl Default for CephIoThresholds {
    fn default() -> Self {
        Self {
            io_warning: 10_000,
            byte_warning: 200,
        }
    }
}

/// Produces two findings: operation rate and byte throughput. Both stay in
/// the aggregation list so the supervisor sees each line.
pub fn evaluate(status: &CephIoStatus, thresholds: &CephIoThresholds) -> Vec<Finding> {
    let pg = &status.pgmap;
    let read_mb = round2(pg.read_bytes_sec as f64 / 1_048_576.0);
    let write_mb = round2(pg.write_bytes_sec as f64 / 1_048_576.0);

    let ops_state = if pg.read_op_per_sec >= thresholds.io_warning
        || pg.write_op_per_sec >= thresholds.io_warning
    {
        CheckState::Warning
    } else {
        CheckState::Ok
    };
    let ops_finding = Finding::new(
        ops_state,
        "ceph_io",
        format!(
            "CEPH IO operation usage is {} ops read / {} ops write per seconds.",
            pg.read_op_per_sec, pg.write_op_per_sec,
        ),
    )
    .with_perf(vec![
        io_metric("ceph io read per sec", pg.read_op_per_sec.to_string(), thresholds.io_warning),
        io_metric("ceph io write per sec", pg.write_op_per_sec.to_string(), thresholds.io_warning),
    ]);

    let byte_state = if read_mb >= thresholds.byte_warning as f64
        || write_mb >= thresholds.byte_warning as f64
    {
        CheckState::Warning
    } else {
        CheckState::Ok
    };
    let byte_finding = Finding::new(
        byte_state,
        "ceph_io",
        format!(
            "CEPH IO byte usage is {} MB read / {} MB write per seconds.",
            fmt_value(read_mb),
            fmt_value(write_mb),
        ),
    )
    .with_perf(vec![
        io_metric("ceph byte read per sec", fmt_value(read_mb), thresholds.byte_warning),
        io_metric("ceph byte write per sec", fmt_value(write_mb), thresholds.byte_warning),
    ]);

    vec![ops_finding, byte_finding]
}

fn io_metric(label: &str, value: String, warning: u64) -> PerfMetric {
    PerfMetric {
        label: label.to_string(),
        value,
        warn: Some(warning.to_string()),
        crit: None,
        min: Some("0".to_string()),
        max: None,
    }
}
