use std::collections::HashSet;

use crate::domain::entities::finding::Finding;
use crate::domain::value_objects::check_state::CheckState;

/// Collapses the accumulated findings into the winning severity subset.
///
/// Findings with identical state and message are deduplicated first (first
/// occurrence wins, order preserved), then the worst state present selects
/// which findings get reported: every CRITICAL line when any exists, else
/// every WARNING line, else the OK lines. An empty list grades OK.
#[must_use]
pub fn select_worst(findings: Vec<Finding>) -> (CheckState, Vec<Finding>) {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for finding in findings {
        if seen.insert((finding.state, finding.message.clone())) {
            unique.push(finding);
        }
    }
    let worst = unique
        .iter()
        .map(|finding| finding.state)
        .max()
        .unwrap_or(CheckState::Ok);
    let winners = unique
        .into_iter()
        .filter(|finding| finding.state == worst)
        .collect();
    (worst, winners)
}
