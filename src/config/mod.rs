//! Configuration module
//!
//! Run parameters, fixed at build time.

#![allow(dead_code)]

use std::time::Duration;
use tracing::Level;

/// GraphQL endpoint of the API under test
pub const DEFAULT_ENDPOINT: &str = "http://34.96.244.61:4000/graphql";

/// Number of synthetic users per run
pub const DEFAULT_USERS: usize = 1000;

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Load test configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTestConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,

    /// Identities generated per run
    pub users: usize,

    /// Per-request timeout; `None` means requests may hang indefinitely
    pub timeout: Option<Duration>,

    /// Cap on in-flight requests per phase; `None` fans out to the full batch
    pub max_concurrency: Option<usize>,

    /// Log level for this crate; failed requests are only logged at `DEBUG`
    pub log_level: Level,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            users: DEFAULT_USERS,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_concurrency: None,
            log_level: Level::INFO,
        }
    }
}

impl LoadTestConfig {
    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set user count
    pub fn with_users(mut self, users: usize) -> Self {
        self.users = users;
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set concurrency cap. A cap of zero would admit nothing, so it is
    /// raised to one.
    pub fn with_max_concurrency(mut self, max_concurrency: Option<usize>) -> Self {
        self.max_concurrency = max_concurrency.map(|limit| limit.max(1));
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, log_level: Level) -> Self {
        self.log_level = log_level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoadTestConfig::default();
        assert_eq!(config.endpoint, "http://34.96.244.61:4000/graphql");
        assert_eq!(config.users, 1000);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.max_concurrency.is_none());
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_builder() {
        let config = LoadTestConfig::default()
            .with_endpoint("http://localhost:4000/graphql")
            .with_users(5)
            .with_timeout(None)
            .with_max_concurrency(Some(2))
            .with_log_level(Level::DEBUG);

        assert_eq!(config.endpoint, "http://localhost:4000/graphql");
        assert_eq!(config.users, 5);
        assert!(config.timeout.is_none());
        assert_eq!(config.max_concurrency, Some(2));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_zero_concurrency_cap_raised_to_one() {
        let config = LoadTestConfig::default().with_max_concurrency(Some(0));
        assert_eq!(config.max_concurrency, Some(1));

        let config = config.with_max_concurrency(None);
        assert!(config.max_concurrency.is_none());
    }
}
