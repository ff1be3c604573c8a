//! Job definitions — static descriptions of the schedulable background jobs
//! this crate reports on.
//!
//! A [`JobDefinition`] says what a job *is* (type, cadence, retry policy),
//! not what it last *did* — execution records live in [`crate::execution`].

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable description of a schedulable background job.
///
/// `job_type` is the human-entered identifier used to match calculator
/// overrides; it may arrive with arbitrary casing and spacing and is
/// normalized before any lookup (see [`crate::status::normalize_job_type`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDefinition {
    /// Free-form job type identifier (e.g. `"Some Test Job"`).
    pub job_type: String,
    /// Human-readable job name, used as the name of its status detail.
    pub job_name: String,
    /// Short description of what the job does.
    pub description: String,
    /// Cron expression, if the job is cron-triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,
    /// Delay between runs, if the job is fixed-delay-triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_delay: Option<Duration>,
    /// Maximum tolerated age of the last successful run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<Duration>,
    /// Number of automatic restarts after a failed run.
    pub restarts: u32,
}

impl JobDefinition {
    /// A job triggered every `fixed_delay`.
    pub fn fixed_delay(
        job_type: impl Into<String>,
        job_name: impl Into<String>,
        description: impl Into<String>,
        fixed_delay: Duration,
        restarts: u32,
        max_age: Option<Duration>,
    ) -> Self {
        Self {
            job_type: job_type.into(),
            job_name: job_name.into(),
            description: description.into(),
            cron: None,
            fixed_delay: Some(fixed_delay),
            max_age,
            restarts,
        }
    }

    /// A job triggered by a cron expression.
    pub fn cron(
        job_type: impl Into<String>,
        job_name: impl Into<String>,
        description: impl Into<String>,
        cron: impl Into<String>,
        restarts: u32,
        max_age: Option<Duration>,
    ) -> Self {
        Self {
            job_type: job_type.into(),
            job_name: job_name.into(),
            description: description.into(),
            cron: Some(cron.into()),
            fixed_delay: None,
            max_age,
            restarts,
        }
    }

    /// A job with no automatic trigger (started manually or by another system).
    pub fn not_triggerable(
        job_type: impl Into<String>,
        job_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            job_type: job_type.into(),
            job_name: job_name.into(),
            description: description.into(),
            cron: None,
            fixed_delay: None,
            max_age: None,
            restarts: 0,
        }
    }
}

/// Source of the known job definitions.
///
/// Implemented by whatever owns the job registry (scheduler, config layer);
/// consumed read-only by [`crate::status::JobStatusIndicator`].
pub trait JobDefinitionProvider: Send + Sync {
    /// All currently configured job definitions.
    fn job_definitions(&self) -> Vec<JobDefinition>;
}
