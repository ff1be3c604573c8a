// SPDX-License-Identifier: MIT
//! Per-job calculator selection and evaluation.
//!
//! For every job definition the resolver picks exactly one calculator — the
//! configured override when it names a registered key, the default
//! otherwise — and invokes it. A failing calculator is reported as an
//! ERROR-severity detail for that job; it never suppresses the others.

use crate::definition::JobDefinition;
use crate::status::calculator::JobStatusCalculator;
use crate::status::detail::StatusDetail;
use crate::status::normalize::normalize_job_type;
use crate::status::registry::CalculatorRegistry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Resolves each job definition to a calculator and collects the results.
pub struct JobStatusResolver {
    registry: CalculatorRegistry,
    /// Normalized job-type key → calculator key.
    overrides: HashMap<String, String>,
}

impl JobStatusResolver {
    /// Build a resolver over `registry` with the raw override pairs from
    /// configuration. Override keys are normalized on ingestion, so they
    /// match job types regardless of casing, spacing, or hyphenation.
    pub fn new(registry: CalculatorRegistry, overrides: HashMap<String, String>) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(job_type, calculator_key)| (normalize_job_type(&job_type), calculator_key))
            .collect();
        Self { registry, overrides }
    }

    /// Evaluate the status of every job, preserving job-definition order.
    pub fn resolve_all(&self, jobs: &[JobDefinition]) -> Vec<StatusDetail> {
        jobs.iter()
            .map(|job| {
                let calculator = self.calculator_for(&job.job_type);
                match calculator.evaluate(job) {
                    Ok(detail) => detail,
                    Err(e) => {
                        warn!(
                            job_type = %job.job_type,
                            calculator = %calculator.key(),
                            error = %e,
                            "job status calculation failed"
                        );
                        StatusDetail::error(
                            &job.job_name,
                            format!("Status calculation failed: {e:#}"),
                        )
                    }
                }
            })
            .collect()
    }

    /// The calculator responsible for `job_type`: configured override if it
    /// names a registered calculator, the default otherwise.
    fn calculator_for(&self, job_type: &str) -> &Arc<dyn JobStatusCalculator> {
        let key = normalize_job_type(job_type);
        match self.overrides.get(&key) {
            Some(calculator_key) => match self.registry.resolve(calculator_key) {
                Some(calculator) => calculator,
                None => {
                    warn!(
                        job_type = %job_type,
                        calculator = %calculator_key,
                        "configured calculator key is not registered, using default"
                    );
                    self.registry.default_calculator()
                }
            },
            None => self.registry.default_calculator(),
        }
    }
}
