// SPDX-License-Identifier: MIT
//! jobstatus — composite status reporting for configured background jobs.
//!
//! Given a set of job definitions and a set of keyed status calculators,
//! this crate decides which calculator evaluates each job (configured
//! override, else the default) and reduces the individual results into one
//! composite [`StatusDetail`](status::StatusDetail) suitable for an
//! operational health endpoint.
//!
//! Job scheduling, execution history persistence, and HTTP serving live
//! elsewhere; they plug in through the [`JobDefinitionProvider`],
//! [`JobExecutionStore`](execution::JobExecutionStore), and
//! [`JobStatusCalculator`](status::JobStatusCalculator) seams.

pub mod config;
pub mod definition;
pub mod execution;
pub mod status;

pub use config::JobStatusConfig;
pub use definition::{JobDefinition, JobDefinitionProvider};
pub use status::{JobStatusIndicator, Status, StatusDetail};
