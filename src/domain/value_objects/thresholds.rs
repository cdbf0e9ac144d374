use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::check_state::CheckState;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("--warning threshold must be lower than --critical threshold")]
    WarningNotBelowCritical,
    #[error("--warning threshold must be higher than --critical threshold")]
    CriticalNotBelowWarning,
}

/// Warning/critical bounds for a single check, validated at construction
/// so no request is issued with an inconsistent configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub warning: i32,
    pub critical: i32,
}

impl ThresholdPair {
    /// Bounds for usage-style checks where higher is worse.
    pub fn ascending(warning: i32, critical: i32) -> Result<Self, ThresholdError> {
        if warning < critical {
            Ok(Self { warning, critical })
        } else {
            Err(ThresholdError::WarningNotBelowCritical)
        }
    }

    /// Bounds for wearout-style checks where lower is worse.
    pub fn descending(warning: i32, critical: i32) -> Result<Self, ThresholdError> {
        if critical < warning {
            Ok(Self { warning, critical })
        } else {
            Err(ThresholdError::CriticalNotBelowWarning)
        }
    }

    /// Grades a usage percentage. The critical bound wins at equality:
    /// a percent exactly on it is CRITICAL.
    #[must_use]
    pub fn grade_usage(&self, percent: f64) -> CheckState {
        if percent >= f64::from(self.critical) {
            CheckState::Critical
        } else if percent >= f64::from(self.warning) {
            CheckState::Warning
        } else {
            CheckState::Ok
        }
    }

    /// Grades a remaining-endurance percentage, where lower is worse.
    /// A value exactly on the critical bound stays WARNING; only values
    /// strictly below it are CRITICAL.
    #[must_use]
    pub fn grade_wearout(&self, wearout: i64) -> CheckState {
        let warning = i64::from(self.warning);
        let critical = i64::from(self.critical);
        if wearout <= warning && wearout >= critical {
            CheckState::Warning
        } else if wearout < critical {
            CheckState::Critical
        } else {
            CheckState::Ok
        }
    }
}
