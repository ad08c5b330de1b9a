//! Console report formatting
//!
//! Renders a [`LoadTestReport`] as the flat plain-text summary printed at
//! the end of a run.

use std::fmt::Write;

use crate::models::{LoadTestReport, PhaseSummary};

/// Plain-text report formatter
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format the full report: header, then one section per phase
    pub fn format_report(&self, report: &LoadTestReport) -> String {
        let mut output = String::new();

        output.push_str("\nPerformance Test Results:\n");
        let _ = writeln!(output, "Total Users: {}", report.users);
        output.push('\n');

        output.push_str(&self.format_phase(&report.signup));
        output.push('\n');
        output.push_str(&self.format_phase(&report.login));

        output
    }

    /// Format one phase section
    pub fn format_phase(&self, summary: &PhaseSummary) -> String {
        let label = summary.operation.label();
        let plural = summary.operation.plural();
        let mut output = String::new();

        let _ = writeln!(output, "{label} Test:");
        let _ = writeln!(output, "Total Duration: {:?}", summary.wall_clock);
        let _ = writeln!(output, "Successful {plural}: {}", summary.successes);
        let _ = writeln!(output, "Failed {plural}: {}", summary.failures);
        let _ = writeln!(
            output,
            "Average {label} Duration: {:?}",
            summary.average()
        );

        output
    }
}
