//! HTTP client for the GraphQL endpoint
//!
//! Posts `{query, variables}` as JSON and decodes `{data, errors}`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

use super::{GraphQLRequest, GraphQLResponse, Transport, TransportError};

/// GraphQL-over-HTTP client bound to a single endpoint
#[derive(Clone)]
pub struct GraphQLClient {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl GraphQLClient {
    /// Create a client; `None` leaves requests unbounded
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_send_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout(self.timeout.unwrap_or_default())
        } else if e.is_connect() {
            TransportError::Connect(self.endpoint.clone())
        } else {
            TransportError::Request(e.to_string())
        }
    }

    /// The client timeout also covers reading the body
    fn map_body_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout(self.timeout.unwrap_or_default())
        } else {
            TransportError::Decode(e.to_string())
        }
    }
}

#[async_trait]
impl Transport for GraphQLClient {
    async fn send(
        &self,
        query: &str,
        variables: Map<String, Value>,
    ) -> Result<GraphQLResponse, TransportError> {
        let body = serde_json::to_vec(&GraphQLRequest::new(query, variables))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_body_error(e))?;

        debug!("Response: {} ({} bytes)", status.as_u16(), bytes.len());

        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
