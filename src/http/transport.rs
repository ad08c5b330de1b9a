//! Transport abstraction
//!
//! Operation runners talk to the API only through [`Transport`], so a stub
//! can stand in for the network in tests.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

use super::GraphQLResponse;

/// Transport-level failures. A non-empty GraphQL `errors` list is not one.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to encode request: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Connection refused to {0}")]
    Connect(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Sends one GraphQL query and returns the decoded response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        query: &str,
        variables: Map<String, Value>,
    ) -> Result<GraphQLResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TransportError::Connect("http://localhost:4000/graphql".to_string()).to_string(),
            "Connection refused to http://localhost:4000/graphql"
        );
        assert_eq!(
            TransportError::Timeout(Duration::from_secs(30)).to_string(),
            "Timeout after 30s"
        );
        assert_eq!(
            TransportError::Timeout(Duration::from_millis(500)).to_string(),
            "Timeout after 500ms"
        );
    }
}
