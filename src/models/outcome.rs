//! Per-request outcomes and per-phase aggregates
//!
//! Defines operation kinds, outcome records, and phase summaries.

use std::fmt;
use std::time::Duration;

/// API operation under test
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Signup,
    Login,
}

impl OperationKind {
    /// Short lowercase name, as used in logs
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Signup => "signup",
            OperationKind::Login => "login",
        }
    }

    /// Capitalized label used in report section headers
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::Signup => "Signup",
            OperationKind::Login => "Login",
        }
    }

    /// Plural noun used in report count lines
    pub fn plural(&self) -> &'static str {
        match self {
            OperationKind::Signup => "Signups",
            OperationKind::Login => "Logins",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of running one operation against one identity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeRecord {
    pub operation: OperationKind,
    pub success: bool,
    pub duration: Duration,
    /// Present iff `success` is false
    pub error: Option<String>,
}

impl OutcomeRecord {
    pub fn success(operation: OperationKind, duration: Duration) -> Self {
        Self {
            operation,
            success: true,
            duration,
            error: None,
        }
    }

    pub fn failure(operation: OperationKind, duration: Duration, error: impl Into<String>) -> Self {
        Self {
            operation,
            success: false,
            duration,
            error: Some(error.into()),
        }
    }
}

impl fmt::Display for OutcomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = if self.success { "✓" } else { "✗" };
        write!(f, "{} {} [{:?}]", symbol, self.operation, self.duration)?;
        if let Some(err) = &self.error {
            write!(f, " - {err}")?;
        }
        Ok(())
    }
}

/// Aggregate of one phase
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseSummary {
    pub operation: OperationKind,
    /// Number of units launched in the phase
    pub total: usize,
    pub successes: usize,
    pub failures: usize,
    /// Wall-clock time from phase start to the end of draining
    pub wall_clock: Duration,
    /// Sum of per-unit durations; exceeds `wall_clock` under concurrency
    pub total_elapsed: Duration,
}

impl PhaseSummary {
    /// Build a summary from drained outcome records.
    ///
    /// `total` is the launched batch size, which is also the divisor of
    /// [`PhaseSummary::average`].
    pub fn from_outcomes<'a>(
        operation: OperationKind,
        total: usize,
        wall_clock: Duration,
        outcomes: impl IntoIterator<Item = &'a OutcomeRecord>,
    ) -> Self {
        let mut successes = 0;
        let mut total_elapsed = Duration::ZERO;

        for outcome in outcomes {
            if outcome.success {
                successes += 1;
            }
            total_elapsed += outcome.duration;
        }

        Self {
            operation,
            total,
            successes,
            failures: total.saturating_sub(successes),
            wall_clock,
            total_elapsed,
        }
    }

    /// Mean per-unit duration: summed unit durations divided by batch size
    pub fn average(&self) -> Duration {
        if self.total == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total_elapsed.as_nanos() / self.total as u128;
        Duration::from_nanos(nanos as u64)
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.successes as f64 / self.total as f64) * 100.0
        }
    }
}

/// Results of a full signup + login run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTestReport {
    pub users: usize,
    pub signup: PhaseSummary,
    pub login: PhaseSummary,
}
