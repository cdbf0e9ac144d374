use serde::{Deserialize, Serialize};

use crate::domain::value_objects::check_state::CheckState;

/// One metric tuple of the performance-data block, rendered as
/// `label=value;warn;crit;min;max` with absent bounds left empty and the
/// label single-quoted when it contains whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfMetric {
    pub label: String,
    /// Already-formatted value, unit suffix included where the supervisor
    /// expects one (`90.0%`, `7.5GB`).
    pub value: String,
    pub warn: Option<String>,
    pub crit: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

impl PerfMetric {
    #[must_use]
    pub fn render(&self) -> String {
        let label = if self.label.contains(char::is_whitespace) {
            format!("'{}'", self.label)
        } else {
            self.label.clone()
        };
        format!(
            "{label}={};{};{};{};{}",
            self.value,
            self.warn.as_deref().unwrap_or(""),
            self.crit.as_deref().unwrap_or(""),
            self.min.as_deref().unwrap_or(""),
            self.max.as_deref().unwrap_or(""),
        )
    }
}

/// One graded observation about a single checked subject.
/// Immutable once produced by an evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub state: CheckState,
    pub subject: String,
    pub message: String,
    pub perf: Vec<PerfMetric>,
}

impl Finding {
    #[must_use]
    pub fn new(state: CheckState, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            state,
            subject: subject.into(),
            message: message.into(),
            perf: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_perf(mut self, perf: Vec<PerfMetric>) -> Self {
        self.perf = perf;
        self
    }
}
