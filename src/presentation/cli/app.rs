use clap::{ArgGroup, Parser, Subcommand};

use crate::application::probe::Check;
use crate::domain::checks::ceph_io::CephIoThresholds;
use crate::domain::value_objects::storage_filter::StorageFilter;
use crate::domain::value_objects::thresholds::{ThresholdError, ThresholdPair};
use crate::infrastructure::api::auth::Credentials;

/// check_pve — Proxmox VE health probe
///
/// Queries the cluster management API and reports one OK / WARNING /
/// CRITICAL / UNKNOWN verdict with performance data for the selected
/// subcommand.
#[derive(Parser, Debug)]
#[command(name = "check_pve")]
#[command(version, about, long_about)]
#[command(group(
    ArgGroup::new("auth")
        .args(["api_password", "api_token"])
        .required(true)
))]
pub struct Cli {
    /// Host FQDN or IP of the API endpoint
    #[arg(long)]
    pub hostname: String,

    /// API port
    #[arg(long, default_value_t = 8006)]
    pub api_port: u16,

    /// API user, e.g. monitoring@pve
    #[arg(long)]
    pub api_user: String,

    /// API password, exchanged for a session ticket
    #[arg(long)]
    pub api_password: Option<String>,

    /// API token, format: token_ID=secret
    #[arg(long)]
    pub api_token: Option<String>,

    /// Skip HTTPS certificate verification
    #[arg(long)]
    pub insecure: bool,

    /// Node name the check runs against
    #[arg(long)]
    pub nodename: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub check: CheckCommand,
}

/// Available checks
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Node CPU usage percentage
    Cpu {
        /// Warning threshold in percent
        #[arg(long)]
        warning: i32,
        /// Critical threshold in percent
        #[arg(long)]
        critical: i32,
    },

    /// Node memory usage
    Memory {
        /// Warning threshold in percent
        #[arg(long)]
        warning: i32,
        /// Critical threshold in percent
        #[arg(long)]
        critical: i32,
    },

    /// Node swap usage
    Swap {
        /// Warning threshold in percent
        #[arg(long)]
        warning: i32,
        /// Critical threshold in percent
        #[arg(long)]
        critical: i32,
    },

    /// Installed package version, always OK
    Pveversion,

    /// Cluster quorum and node liveness
    Cluster,

    /// CEPH cluster health summary
    Ceph,

    /// CEPH IO load, operations and throughput
    #[command(name = "ceph_io")]
    CephIo {
        /// Warning threshold in operations per second
        #[arg(long = "ceph-io-warning", default_value_t = 10_000)]
        io_warning: u64,
        /// Warning threshold in MB per second
        #[arg(long = "ceph-byte-warning", default_value_t = 200)]
        byte_warning: u64,
    },

    /// Physical disk SMART health and wearout
    #[command(name = "disks_health")]
    DisksHealth {
        /// Warning threshold for remaining wearout percent
        #[arg(long)]
        warning: i32,
        /// Critical threshold for remaining wearout percent
        #[arg(long)]
        critical: i32,
    },

    /// Node service states
    Services,

    /// Usage of every configured storage
    Storage {
        /// Warning threshold in percent
        #[arg(long)]
        warning: i32,
        /// Critical threshold in percent
        #[arg(long)]
        critical: i32,
        /// Storage name to skip, repeatable
        #[arg(long = "ignore-disk", value_name = "DISKNAME")]
        ignore_disks: Vec<String>,
        /// Storage name to check exclusively, repeatable; overrides --ignore-disk
        #[arg(long = "disk-name", value_name = "DISKNAME")]
        include_disks: Vec<String>,
    },
}

impl Cli {
    /// Credential material from the parsed flags; the argument group
    /// guarantees exactly one of the two is present.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        if let Some(ref token) = self.api_token {
            Credentials::Token {
                user: self.api_user.clone(),
                token: token.clone(),
            }
        } else {
            Credentials::Password {
                user: self.api_user.clone(),
                password: self.api_password.clone().unwrap_or_default(),
            }
        }
    }

    /// Validates threshold ordering and assembles the check to run. Errors
    /// here surface as usage errors before any request is issued.
    pub fn to_check(&self) -> Result<Check, ThresholdError> {
        Ok(match &self.check {
            CheckCommand::Cpu { warning, critical } => Check::Cpu {
                thresholds: ThresholdPair::ascending(*warning, *critical)?,
            },
            CheckCommand::Memory { warning, critical } => Check::Memory {
                thresholds: ThresholdPair::ascending(*warning, *critical)?,
            },
            CheckCommand::Swap { warning, critical } => Check::Swap {
                thresholds: ThresholdPair::ascending(*warning, *critical)?,
            },
            CheckCommand::Pveversion => Check::Pveversion,
            CheckCommand::Cluster => Check::Cluster,
            CheckCommand::Ceph => Check::Ceph,
            CheckCommand::CephIo {
                io_warning,
                byte_warning,
            } => Check::CephIo {
                thresholds: CephIoThresholds {
                    io_warning: *io_warning,
                    byte_warning: *byte_warning,
                },
            },
            CheckCommand::DisksHealth { warning, critical } => Check::DisksHealth {
                thresholds: ThresholdPair::descending(*warning, *critical)?,
            },
            CheckCommand::Services => Check::Services,
            CheckCommand::Storage {
                warning,
                critical,
                ignore_disks,
                include_disks,
            } => Check::Storage {
                thresholds: ThresholdPair::ascending(*warning, *critical)?,
                filter: StorageFilter::new(ignore_disks.clone(), include_disks.clone()),
            },
        })
    }

    /// Name of the selected subcommand, for error messages.
    #[must_use]
    pub fn subcommand_name(&self) -> &'static str {
        match &self.check {
            CheckCommand::Cpu { .. } => "cpu",
            CheckCommand::Memory { .. } => "memory",
            CheckCommand::Swap { .. } => "swap",
            CheckCommand::Pveversion => "pveversion",
            CheckCommand::Cluster => "cluster",
            CheckCommand::Ceph => "ceph",
            CheckCommand::CephIo { .. } => "ceph_io",
            CheckCommand::DisksHealth { .. } => "disks_health",
            CheckCommand::Services => "services",
            CheckCommand::Storage { .. } => "storage",
        }
    }
}
