//! Tracing subscriber setup
//!
//! Log lines are scoped to this crate and written to stderr, leaving stdout
//! to the report.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// `EnvFilter` directive enabling `level` for this crate only
pub fn filter_directive(level: Level) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

/// Install the global subscriber
pub fn init_logger(level: Level) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(Level::INFO), "auth_load_test=INFO");
        assert_eq!(filter_directive(Level::DEBUG), "auth_load_test=DEBUG");
    }
}
