//! GraphQL transport
//!
//! Request/response envelopes and the client that shuttles them to the
//! API under test.

mod client;
mod envelope;
mod transport;

pub use client::GraphQLClient;
pub use envelope::{GraphQLRequest, GraphQLResponse};
pub use transport::{Transport, TransportError};

#[cfg(test)]
pub mod stub;
