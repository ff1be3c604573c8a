// SPDX-License-Identifier: MIT
//! Job status system.
//!
//! Provides [`JobStatusIndicator`], which resolves one
//! [`JobStatusCalculator`] per configured job and aggregates the individual
//! results into a single composite [`StatusDetail`] named `"Jobs"`.
//!
//! # Resolution
//! Per job: the job type is normalized, looked up in the configured
//! override map, and matched against the registered calculators; jobs
//! without a (valid) override use the default calculator
//! (key `"warningOnLastJobFailed"`).
//!
//! # Usage
//! ```rust,no_run
//! use std::sync::Arc;
//! use jobstatus::config::JobStatusConfig;
//! use jobstatus::status::{
//!     calculators::{ErrorOnLastJobFailed, WarningOnLastJobFailed},
//!     JobStatusCalculator, JobStatusIndicator,
//! };
//! # let provider: Arc<dyn jobstatus::definition::JobDefinitionProvider> = unimplemented!();
//! # let store: Arc<dyn jobstatus::execution::JobExecutionStore> = unimplemented!();
//!
//! let calculators: Vec<Arc<dyn JobStatusCalculator>> = vec![
//!     Arc::new(WarningOnLastJobFailed::new(store.clone())),
//!     Arc::new(ErrorOnLastJobFailed::new(store)),
//! ];
//! let indicator =
//!     JobStatusIndicator::new(provider, calculators, &JobStatusConfig::default())?;
//!
//! let report = indicator.status_detail();
//! println!("{}: {}", report.status, report.message);
//! # Ok::<(), jobstatus::status::RegistryError>(())
//! ```

pub mod aggregator;
pub mod calculator;
pub mod calculators;
pub mod detail;
pub mod indicator;
pub mod normalize;
pub mod registry;
pub mod resolver;

// Convenience re-exports.
pub use aggregator::{aggregate, COMPOSITE_NAME, NO_JOB_DEFINITIONS_MESSAGE};
pub use calculator::JobStatusCalculator;
pub use detail::{Status, StatusDetail};
pub use indicator::JobStatusIndicator;
pub use normalize::normalize_job_type;
pub use registry::{CalculatorRegistry, RegistryError, DEFAULT_CALCULATOR_KEY};
pub use resolver::JobStatusResolver;
