//! Output formatting for load test results

mod formatter;

pub use formatter::ReportFormatter;
