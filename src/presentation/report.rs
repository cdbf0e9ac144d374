use crate::domain::entities::finding::{Finding, PerfMetric};
use crate::domain::value_objects::check_state::CheckState;

/// Renders one plugin line: `SEVERITY - message`, with the performance-data
/// block appended after a `|` when the finding carries metrics.
#[must_use]
pub fn render_line(finding: &Finding) -> String {
    let mut line = format!("{} - {}", finding.state, finding.message);
    if !finding.perf.is_empty() {
        let block: Vec<String> = finding.perf.iter().map(PerfMetric::render).collect();
        line.push_str(" |");
        line.push_str(&block.join(" "));
    }
    line
}

/// Prints every winning finding, one line each, on stdout.
pub fn print_report(findings: &[Finding]) {
    for finding in findings {
        println!("{}", render_line(finding));
    }
}

/// Prints the single line a transport fault produces.
pub fn print_unknown(message: &str) {
    println!("{} - {message}", CheckState::Unknown);
}
