// SPDX-License-Identifier: MIT
//! Bundled calculator implementations.
//!
//! Both read the most recent execution of a job through the
//! [`JobExecutionStore`] seam and differ only in the severity they assign
//! to a failed last run: [`WarningOnLastJobFailed`] reports WARNING,
//! [`ErrorOnLastJobFailed`] reports ERROR.

use crate::definition::JobDefinition;
use crate::execution::{JobExecutionStore, JobState};
use crate::status::calculator::JobStatusCalculator;
use crate::status::detail::{Status, StatusDetail};
use anyhow::Context;
use std::sync::Arc;

/// Key of [`WarningOnLastJobFailed`]; also the registry's default key.
pub const WARNING_ON_LAST_JOB_FAILED_KEY: &str = "warningOnLastJobFailed";

/// Key of [`ErrorOnLastJobFailed`].
pub const ERROR_ON_LAST_JOB_FAILED_KEY: &str = "errorOnLastJobFailed";

/// Map the last execution of `job` to a status, assigning `on_failure` when
/// the last run failed.
fn status_of_last_execution(
    store: &dyn JobExecutionStore,
    job: &JobDefinition,
    on_failure: Status,
) -> anyhow::Result<StatusDetail> {
    let last = store
        .last_execution(&job.job_type)
        .with_context(|| format!("reading last execution of job type {:?}", job.job_type))?;

    let detail = match last {
        None => StatusDetail::ok(&job.job_name, "Job did not start yet."),
        Some(execution) => match execution.state {
            JobState::Running => StatusDetail::ok(&job.job_name, "Job is currently running."),
            JobState::Succeeded => {
                StatusDetail::ok(&job.job_name, "Last job run was successful.")
            }
            JobState::Dead => StatusDetail::warning(
                &job.job_name,
                "Job died without reporting a result.",
            ),
            JobState::Failed => {
                let message = match execution.error_message {
                    Some(error) => format!("Last job run failed: {error}"),
                    None => "Last job run failed.".to_string(),
                };
                StatusDetail::new(&job.job_name, on_failure, message)
            }
        },
    };
    Ok(detail)
}

/// Reports WARNING when the last run of a job failed.
pub struct WarningOnLastJobFailed {
    store: Arc<dyn JobExecutionStore>,
}

impl WarningOnLastJobFailed {
    pub fn new(store: Arc<dyn JobExecutionStore>) -> Self {
        Self { store }
    }
}

impl JobStatusCalculator for WarningOnLastJobFailed {
    fn key(&self) -> &str {
        WARNING_ON_LAST_JOB_FAILED_KEY
    }

    fn evaluate(&self, job: &JobDefinition) -> anyhow::Result<StatusDetail> {
        status_of_last_execution(self.store.as_ref(), job, Status::Warning)
    }
}

/// Reports ERROR when the last run of a job failed.
pub struct ErrorOnLastJobFailed {
    store: Arc<dyn JobExecutionStore>,
}

impl ErrorOnLastJobFailed {
    pub fn new(store: Arc<dyn JobExecutionStore>) -> Self {
        Self { store }
    }
}

impl JobStatusCalculator for ErrorOnLastJobFailed {
    fn key(&self) -> &str {
        ERROR_ON_LAST_JOB_FAILED_KEY
    }

    fn evaluate(&self, job: &JobDefinition) -> anyhow::Result<StatusDetail> {
        status_of_last_execution(self.store.as_ref(), job, Status::Error)
    }
}
