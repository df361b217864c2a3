//! Error types for benchmark runs.
//!
//! This module provides the [`BenchError`] type raised by the suite driver and
//! the [`Result`] convenience type.

use thiserror::Error;

/// Error type for a benchmark run.
///
/// The only failure a run can hit is a comparison strategy disagreeing with
/// the reference predicate. It signals a bug in the strategy, so the driver
/// never retries and aborts the whole suite instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// A strategy returned a different answer than `str::starts_with` for the
    /// same sample pair.
    #[error(
        "Invalid result: {strategy} returned {actual} for subject {subject:?} and prefix {prefix:?}, expected {expected}"
    )]
    ResultMismatch {
        /// Name of the strategy that produced the wrong answer.
        strategy: &'static str,
        /// Subject string at the time of the failing call.
        subject: String,
        /// Prefix string at the time of the failing call.
        prefix: String,
        /// Answer of the reference predicate.
        expected: bool,
        /// Answer of the strategy under test.
        actual: bool,
    },
}

impl BenchError {
    /// Name of the strategy the error was raised for.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::ResultMismatch { strategy, .. } => strategy,
        }
    }
}

/// Convenience type alias for [`std::result::Result`] with [`BenchError`].
pub type Result<T> = std::result::Result<T, BenchError>;
