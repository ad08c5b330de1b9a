//! Scriptable in-process transport for tests

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{GraphQLResponse, Transport, TransportError};

type Respond = dyn Fn(usize) -> Result<GraphQLResponse, TransportError> + Send + Sync;
type Delay = dyn Fn(usize) -> Duration + Send + Sync;

/// Transport that answers from closures keyed by identity index.
///
/// The index is parsed from usernames of the form `user_<n>`; anything
/// else maps to index 0.
pub struct StubTransport {
    respond: Box<Respond>,
    delay: Box<Delay>,
    calls: AtomicUsize,
}

impl StubTransport {
    pub fn responding(
        respond: impl Fn(usize) -> Result<GraphQLResponse, TransportError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            delay: Box::new(|_| Duration::ZERO),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::responding(|_| Ok(GraphQLResponse::default()))
    }

    pub fn failing(message: &'static str) -> Self {
        Self::responding(move |_| Err(TransportError::Request(message.to_string())))
    }

    pub fn with_delay(
        mut self,
        delay: impl Fn(usize) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Identity index encoded in the request's username
fn index_of(variables: &Map<String, Value>) -> usize {
    let Some(input) = variables.get("userInput") else {
        return 0;
    };
    input
        .get("Username")
        .or_else(|| input.get("username"))
        .and_then(Value::as_str)
        .and_then(|name| name.strip_prefix("user_"))
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(
        &self,
        _query: &str,
        variables: Map<String, Value>,
    ) -> Result<GraphQLResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let index = index_of(&variables);

        let delay = (self.delay)(index);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        (self.respond)(index)
    }
}
