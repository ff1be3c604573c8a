// SPDX-License-Identifier: MIT
//! The calculator capability — one policy for turning a job's state into a
//! [`StatusDetail`].

use crate::definition::JobDefinition;
use crate::status::detail::StatusDetail;

/// A keyed status-calculation policy.
///
/// Implementations are registered in the
/// [`CalculatorRegistry`](crate::status::CalculatorRegistry) under their
/// `key()` and selected per job type via the configured override map.
/// Invariants:
/// - `key()` is stable for the lifetime of the calculator.
/// - `evaluate` produces a fresh [`StatusDetail`] per call; it may block
///   (e.g. on an execution-store lookup) but must not retain the borrow.
///
/// An `Err` from `evaluate` is reported as an ERROR-severity detail for that
/// job and never aborts the evaluation of other jobs.
pub trait JobStatusCalculator: Send + Sync {
    /// Configuration key that selects this calculator.
    fn key(&self) -> &str;

    /// Evaluate the current status of `job`.
    fn evaluate(&self, job: &JobDefinition) -> anyhow::Result<StatusDetail>;
}
