//! check_pve — Proxmox VE health probe.
//!
//! Queries the cluster management API over HTTPS and collapses the response
//! into a single OK / WARNING / CRITICAL / UNKNOWN verdict with performance
//! data, in the plugin output format monitoring supervisors consume.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
