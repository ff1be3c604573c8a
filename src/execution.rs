//! Job execution records — what a job last *did*.
//!
//! The status calculators in [`crate::status::calculators`] read the most
//! recent execution of a job through the [`JobExecutionStore`] seam.
//! Persistence of execution history is someone else's concern; this crate
//! only defines the record shape it needs to read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terminal or in-flight state of a single job execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    /// The job is still running.
    Running,
    /// The job finished without errors.
    Succeeded,
    /// The job finished with errors.
    Failed,
    /// The job stopped reporting heartbeats and was given up on.
    Dead,
}

/// Record of a single job execution, as read from the execution store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobExecution {
    /// Job type this execution belongs to.
    pub job_type: String,
    pub state: JobState,
    /// When the execution started.
    pub started: DateTime<Utc>,
    /// When the execution stopped; `None` while running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped: Option<DateTime<Utc>>,
    /// Last error message reported by the execution, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Read-only access to job execution history.
///
/// `last_execution` may block (e.g. on a database lookup); callers that need
/// a timeout must impose one themselves.
pub trait JobExecutionStore: Send + Sync {
    /// The most recent execution of `job_type`, or `None` if it never ran.
    fn last_execution(&self, job_type: &str) -> anyhow::Result<Option<JobExecution>>;
}
