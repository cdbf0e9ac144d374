#![allow(clippy::expect_used)]

//! End-to-end evaluation over realistic API payloads: decode the fixture,
//! run the evaluator, aggregate, and assert the exact plugin lines and
//! exit code the supervisor would see.

use check_pve::domain::aggregate::select_worst;
use check_pve::domain::checks;
use check_pve::domain::checks::ceph_io::CephIoThresholds;
use check_pve::domain::checks::memory::MemoryKind;
use check_pve::domain::entities::ceph::{CephIoStatus, CephStatus};
use check_pve::domain::entities::cluster::ClusterEntry;
use check_pve::domain::entities::disk::DiskEntry;
use check_pve::domain::entities::finding::Finding;
use check_pve::domain::entities::node::NodeStatus;
use check_pve::domain::entities::service::ServiceEntry;
use check_pve::domain::entities::storage::StorageEntry;
use check_pve::domain::value_objects::storage_filter::StorageFilter;
use check_pve::domain::value_objects::thresholds::ThresholdPair;
use check_pve::presentation::cli::app::Cli;
use check_pve::presentation::report::render_line;
use clap::Parser;

fn load_fixture<T: serde::de::DeserializeOwned>(name: &str) -> T {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let json = std::fs::read_to_string(&path).expect("read fixture");
    serde_json::from_str(&json).expect("parse fixture")
}

fn report(findings: Vec<Finding>) -> (i32, Vec<String>) {
    let (state, winners) = select_worst(findings);
    let lines = winners.iter().map(render_line).collect();
    (state.exit_code(), lines)
}

#[test]
fn cpu_over_critical_prints_one_critical_line() {
    let status: NodeStatus = load_fixture("node_status.json");
    let thresholds = ThresholdPair::ascending(65, 85).expect("thresholds");
    let (exit, lines) = report(checks::cpu::evaluate(&status, &thresholds));
    assert_eq!(exit, 2);
    assert_eq!(lines, ["CRITICAL - CPU usage is 90.0 %. |usage=90.0%;65;85;0;100"]);
}

#[test]
fn memory_at_half_capacity_is_ok() {
    let status: NodeStatus = load_fixture("node_status.json");
    let thresholds = ThresholdPair::ascending(80, 90).expect("thresholds");
    let (exit, lines) = report(checks::memory::evaluate(
        MemoryKind::Memory,
        &status,
        &thresholds,
    ));
    assert_eq!(exit, 0);
    assert_eq!(
        lines,
        ["OK - memory usage is 50.34 % (7.5 GB / 14.9 GB)! |usage=7.5GB;11.92;13.41;0;14.9"]
    );
}

#[test]
fn swap_usage_reports_in_gigabytes() {
    let status: NodeStatus = load_fixture("node_status.json");
    let thresholds = ThresholdPair::ascending(80, 90).expect("thresholds");
    let (exit, lines) = report(checks::memory::evaluate(
        MemoryKind::Swap,
        &status,
        &thresholds,
    ));
    assert_eq!(exit, 0);
    assert_eq!(
        lines,
        ["OK - swap usage is 6.25 % (0.5 GB / 8.0 GB)! |usage=0.5GB;6.4;7.2;0;8.0"]
    );
}

#[test]
fn pveversion_is_always_ok() {
    let status: NodeStatus = load_fixture("node_status.json");
    let (exit, lines) = report(checks::version::evaluate(&status));
    assert_eq!(exit, 0);
    assert_eq!(lines, ["OK - pve-manager/7.4-3"]);
}

#[test]
fn cluster_with_offline_node_warns_and_names_it() {
    let entries: Vec<ClusterEntry> = load_fixture("cluster_status.json");
    let (exit, lines) = report(checks::cluster::evaluate(&entries));
    assert_eq!(exit, 1);
    assert_eq!(
        lines,
        ["WARNING - prod cluster are working, but there is offline nodes: ('pve2',)!"]
    );
}

#[test]
fn failed_disk_outranks_the_healthy_baseline() {
    let disks: Vec<DiskEntry> = load_fixture("disks.json");
    let thresholds = ThresholdPair::descending(30, 10).expect("thresholds");
    let (exit, lines) = report(checks::disks::evaluate(&disks, &thresholds));
    assert_eq!(exit, 1);
    assert_eq!(
        lines,
        ["WARNING - SAMSUNG - MZ7LH480HAHQ-00005 type: ssd on /dev/sdb is failed: FAILED"]
    );
}

#[test]
fn healthy_fleet_collapses_to_one_ok_line() {
    let disks: Vec<DiskEntry> = load_fixture("disks_healthy.json");
    let thresholds = ThresholdPair::descending(30, 10).expect("thresholds");
    let (exit, lines) = report(checks::disks::evaluate(&disks, &thresholds));
    assert_eq!(exit, 0);
    assert_eq!(lines, ["OK - All disks are healthy."]);
}

#[test]
fn dead_service_warns_and_not_found_units_are_skipped() {
    let services: Vec<ServiceEntry> = load_fixture("services.json");
    let (exit, lines) = report(checks::services::evaluate(&services));
    assert_eq!(exit, 1);
    assert_eq!(lines, ["WARNING - Proxmox VE firewall (pve-firewall) is dead."]);
}

#[test]
fn storage_at_the_critical_bound_wins_over_inactive_warning() {
    let entries: Vec<StorageEntry> = load_fixture("storage.json");
    let thresholds = ThresholdPair::ascending(70, 80).expect("thresholds");
    let (exit, lines) = report(checks::storage::evaluate(
        &entries,
        &thresholds,
        &StorageFilter::default(),
    ));
    assert_eq!(exit, 2);
    assert_eq!(
        lines,
        ["CRITICAL - data disk usage (type: lvmthin) is 80.0 % (7.45 GB / 9.31 GB). \
          |data=7.45GB;6.52;7.45;0;9.31"]
    );
}

#[test]
fn ignoring_the_critical_storage_surfaces_the_inactive_one() {
    let entries: Vec<StorageEntry> = load_fixture("storage.json");
    let thresholds = ThresholdPair::ascending(70, 80).expect("thresholds");
    let filter = StorageFilter::new(vec!["data".to_string()], vec![]);
    let (exit, lines) = report(checks::storage::evaluate(&entries, &thresholds, &filter));
    assert_eq!(exit, 1);
    assert_eq!(lines, ["WARNING - nfs-backup disk is not active!"]);
}

#[test]
fn include_filter_reduces_the_run_to_named_storages() {
    let entries: Vec<StorageEntry> = load_fixture("storage.json");
    let thresholds = ThresholdPair::ascending(70, 80).expect("thresholds");
    // ignore overlaps with include; include wins and the run stays OK
    let filter = StorageFilter::new(vec!["local".to_string()], vec!["local".to_string()]);
    let (exit, lines) = report(checks::storage::evaluate(&entries, &thresholds, &filter));
    assert_eq!(exit, 0);
    assert_eq!(
        lines,
        ["OK - local disk usage (type: dir) is 20.0 % (1.86 GB / 9.31 GB). \
          |local=1.86GB;6.52;7.45;0;9.31"]
    );
}

#[test]
fn unhealthy_ceph_cluster_warns() {
    let status: CephStatus = load_fixture("ceph_status.json");
    let (exit, lines) = report(checks::ceph_health::evaluate(&status));
    assert_eq!(exit, 1);
    assert_eq!(lines, ["WARNING - CEPH cluster is unhealthy!"]);
}

#[test]
fn quiet_ceph_io_prints_both_findings_with_perfdata() {
    let status: CephIoStatus = load_fixture("ceph_io.json");
    let (exit, lines) = report(checks::ceph_io::evaluate(
        &status,
        &CephIoThresholds::default(),
    ));
    assert_eq!(exit, 0);
    assert_eq!(
        lines,
        [
            "OK - CEPH IO operation usage is 250 ops read / 420 ops write per seconds. \
             |'ceph io read per sec'=250;10000;;0; 'ceph io write per sec'=420;10000;;0;",
            "OK - CEPH IO byte usage is 5.0 MB read / 10.0 MB write per seconds. \
             |'ceph byte read per sec'=5.0;200;;0; 'ceph byte write per sec'=10.0;200;;0;",
        ]
    );
}

#[test]
fn evaluation_is_a_pure_function_of_payload_and_config() {
    let entries: Vec<StorageEntry> = load_fixture("storage.json");
    let thresholds = ThresholdPair::ascending(70, 80).expect("thresholds");
    let filter = StorageFilter::default();
    let first = report(checks::storage::evaluate(&entries, &thresholds, &filter));
    let second = report(checks::storage::evaluate(&entries, &thresholds, &filter));
    assert_eq!(first, second);
}

#[test]
fn threshold_subcommands_refuse_to_run_without_bounds() {
    // parse failure happens before any request could be issued
    let result = Cli::try_parse_from([
        "check_pve",
        "--hostname",
        "pve.example.com",
        "--api-user",
        "monitoring@pve",
        "--api-token",
        "mytoken=secret",
        "--nodename",
        "pve1",
        "memory",
    ]);
    assert!(result.is_err());
}
