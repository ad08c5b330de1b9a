//! Operation runners
//!
//! Each operation builds its own GraphQL payload; [`run_operation`] times the
//! transport call and classifies the result into an [`OutcomeRecord`].

mod login;
mod signup;

use serde_json::{Map, Value};
use tracing::debug;

use crate::http::{GraphQLResponse, Transport, TransportError};
use crate::models::{Identity, OperationKind, OutcomeRecord};
use crate::utils::Timer;

pub use login::LoginOperation;
pub use signup::SignupOperation;

/// An API operation that can be driven with an identity
pub trait Operation: Send + Sync {
    fn kind(&self) -> OperationKind;

    /// GraphQL document sent with every request
    fn query(&self) -> &'static str;

    /// Variables for one identity
    fn variables(&self, identity: &Identity) -> Map<String, Value>;
}

/// Run `operation` once for `identity`. Never retries.
pub async fn run_operation(
    operation: &dyn Operation,
    transport: &dyn Transport,
    identity: &Identity,
) -> OutcomeRecord {
    let timer = Timer::start(operation.kind().name());
    let result = transport
        .send(operation.query(), operation.variables(identity))
        .await;
    let duration = timer.stop();

    let outcome = classify(operation.kind(), duration, result);
    if !outcome.success {
        debug!("{} ({})", outcome, identity.username);
    }
    outcome
}

/// Transport failure first, then the first GraphQL error, otherwise success.
pub fn classify(
    kind: OperationKind,
    duration: std::time::Duration,
    result: Result<GraphQLResponse, TransportError>,
) -> OutcomeRecord {
    match result {
        Err(e) => OutcomeRecord::failure(kind, duration, e.to_string()),
        Ok(response) => match response.first_error() {
            Some(message) => OutcomeRecord::failure(kind, duration, message),
            None => OutcomeRecord::success(kind, duration),
        },
    }
}

/// Wrap a single `userInput` object into a variables map
fn user_input(input: Value) -> Map<String, Value> {
    let mut variables = Map::new();
    variables.insert("userInput".to_string(), input);
    variables
}
