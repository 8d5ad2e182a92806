//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use netfray_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator parameters were rejected or generation failed.
    #[error("graph setup failed: {0}")]
    Graph(#[from] GraphError),
    /// A fixture did not have the shape the benchmark requires.
    #[error("fixture `{fixture}` is unusable: {reason}")]
    Fixture {
        /// Name of the fixture.
        fixture: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}
