//! Concurrent phase execution
//!
//! Fans one operation out over a batch of identities and fans the outcome
//! records back in.

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tracing::{error, info, warn};

use crate::http::Transport;
use crate::models::{Identity, OutcomeRecord, PhaseSummary};
use crate::operations::{run_operation, Operation};
use crate::utils::Timer;

/// Runs one operation per identity, all at once
pub struct PhaseExecutor {
    transport: Arc<dyn Transport>,
    max_concurrency: Option<usize>,
}

impl PhaseExecutor {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            max_concurrency: None,
        }
    }

    /// Limit in-flight units. `None` launches the whole batch at once; a
    /// cap of zero is raised to one so the phase can make progress.
    pub fn with_max_concurrency(mut self, max_concurrency: Option<usize>) -> Self {
        self.max_concurrency = max_concurrency.map(|limit| limit.max(1));
        self
    }

    /// Run a full phase and aggregate it
    pub async fn run_phase(
        &self,
        operation: Arc<dyn Operation>,
        identities: &[Identity],
    ) -> PhaseSummary {
        let kind = operation.kind();
        info!("Starting {} phase: {} identities", kind, identities.len());

        let timer = Timer::start(kind.name());
        let outcomes = self.collect(operation, identities).await;
        let summary =
            PhaseSummary::from_outcomes(kind, identities.len(), timer.stop(), &outcomes);

        info!(
            "{} phase completed in {:?} - Success: {}/{} ({:.1}%)",
            kind,
            summary.wall_clock,
            summary.successes,
            summary.total,
            summary.success_rate()
        );

        summary
    }

    /// Launch one unit per identity and return every outcome record, in
    /// completion order.
    pub async fn collect(
        &self,
        operation: Arc<dyn Operation>,
        identities: &[Identity],
    ) -> Vec<OutcomeRecord> {
        let launched = identities.len();
        let (tx, mut rx) = mpsc::channel(launched.max(1));
        let semaphore = self
            .max_concurrency
            .map(|limit| Arc::new(Semaphore::new(limit)));

        let mut handles = Vec::with_capacity(launched);

        for identity in identities.iter().cloned() {
            let tx = tx.clone();
            let transport = self.transport.clone();
            let operation = operation.clone();
            let semaphore = semaphore.clone();

            let handle = tokio::spawn(async move {
                let _permit = match semaphore {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                let outcome =
                    run_operation(operation.as_ref(), transport.as_ref(), &identity).await;

                // Capacity equals the batch size, so this never waits.
                if tx.send(outcome).await.is_err() {
                    warn!("Outcome for {} dropped: collector closed", identity.username);
                }
            });

            handles.push(handle);
        }

        // Completion barrier: every launched unit has finished before the
        // channel is closed.
        let completed = join_all(handles)
            .await
            .into_iter()
            .filter(|joined| match joined {
                Ok(()) => true,
                Err(e) => {
                    error!("{} unit aborted: {}", operation.kind(), e);
                    false
                }
            })
            .count();

        drop(tx);
        rx.close();

        let mut outcomes = Vec::with_capacity(launched);
        while let Some(outcome) = rx.recv().await {
            outcomes.push(outcome);
        }

        if completed != launched || outcomes.len() != launched {
            warn!(
                "{} phase: launched {}, completed {}, collected {}",
                operation.kind(),
                launched,
                completed,
                outcomes.len()
            );
        }

        outcomes
    }
}
