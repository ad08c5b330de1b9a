//! Auth Load Test - concurrent signup/login load tester
//!
//! Generates a batch of synthetic users, signs them all up concurrently
//! against a GraphQL API, then logs them all in concurrently, and prints
//! per-phase duration and success counts.
//!
//! ## Phases
//!
//! 1. Signup: one `signUp` mutation per user, all in flight at once
//! 2. Login: one `logIn` mutation per user, started after every signup
//!    has finished
//!
//! Endpoint and batch size are build-time constants (see [`config`]).
//! The process exits 0 whenever the run completes, however many requests
//! failed.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

mod config;
mod executor;
mod generator;
mod http;
mod models;
mod operations;
mod output;
mod utils;

use config::LoadTestConfig;
use executor::LoadTest;
use http::GraphQLClient;
use output::ReportFormatter;
use utils::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    let config = LoadTestConfig::default();
    init_logger(config.log_level);

    let client = GraphQLClient::with_timeout(&config.endpoint, config.timeout)?;

    info!(
        "Load testing {} with {} users (timeout: {:?})",
        client.endpoint(),
        config.users,
        config.timeout
    );

    let report = LoadTest::new(config, Arc::new(client)).run().await;

    print!("{}", ReportFormatter::new().format_report(&report));

    Ok(())
}
