// SPDX-License-Identifier: MIT
//! Composite status aggregation — reduces all individual job statuses into
//! the single report the health endpoint exposes.
//!
//! The composite status is the worst individual status (ERROR > WARNING >
//! OK). The composite message lists the contributing statuses in
//! job-definition order, so identical inputs always produce an identical
//! report.

use crate::definition::JobDefinition;
use crate::status::detail::{Status, StatusDetail};

/// Name of the composite report.
pub const COMPOSITE_NAME: &str = "Jobs";

/// Message of the terminal no-jobs case.
pub const NO_JOB_DEFINITIONS_MESSAGE: &str = "No job definitions configured in application.";

/// Combine all individual statuses into one composite [`StatusDetail`].
///
/// With no job definitions configured the report is OK with the fixed
/// [`NO_JOB_DEFINITIONS_MESSAGE`]; no calculator runs in that case.
pub fn aggregate(jobs: &[JobDefinition], statuses: &[StatusDetail]) -> StatusDetail {
    if jobs.is_empty() {
        return StatusDetail::ok(COMPOSITE_NAME, NO_JOB_DEFINITIONS_MESSAGE);
    }

    let overall = statuses
        .iter()
        .fold(Status::Ok, |acc, detail| Status::worst(acc, detail.status));

    let message = statuses
        .iter()
        .map(|detail| format!("{}: {} ({})", detail.name, detail.status, detail.message))
        .collect::<Vec<_>>()
        .join("; ");

    StatusDetail::new(COMPOSITE_NAME, overall, message)
}
