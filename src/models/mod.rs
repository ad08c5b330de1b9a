//! Data models for the load test
//!
//! Identities fed into the run, and the outcome types collected from it.

mod identity;
mod outcome;

pub use identity::Identity;
pub use outcome::{LoadTestReport, OperationKind, OutcomeRecord, PhaseSummary};
