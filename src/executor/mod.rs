//! Load test execution engine
//!
//! Concurrent phase execution and the signup-then-login orchestration.

mod phase;

pub use load_test::LoadTest;
pub use phase::PhaseExecutor;
