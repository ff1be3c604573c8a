// SPDX-License-Identifier: MIT
//! Entry point — wires provider, calculators, and overrides into one
//! report-producing indicator.
//!
//! Construction is explicit: the caller hands over the job-definition
//! provider, the calculator list, and the configuration; there is no hidden
//! wiring. Construction fails when no default calculator is registered —
//! the system must not start serving health checks without one.

use crate::config::JobStatusConfig;
use crate::definition::JobDefinitionProvider;
use crate::status::aggregator::aggregate;
use crate::status::calculator::JobStatusCalculator;
use crate::status::detail::StatusDetail;
use crate::status::registry::{CalculatorRegistry, RegistryError};
use crate::status::resolver::JobStatusResolver;
use std::sync::Arc;

/// Produces the composite `"Jobs"` status report on demand.
///
/// Stateless per call: each [`status_detail`](Self::status_detail) reads the
/// current job definitions and evaluates every job fresh. Safe to share
/// across concurrent health-check invocations.
pub struct JobStatusIndicator {
    provider: Arc<dyn JobDefinitionProvider>,
    resolver: JobStatusResolver,
}

impl JobStatusIndicator {
    /// Build the indicator from its collaborators.
    pub fn new(
        provider: Arc<dyn JobDefinitionProvider>,
        calculators: Vec<Arc<dyn JobStatusCalculator>>,
        config: &JobStatusConfig,
    ) -> Result<Self, RegistryError> {
        let registry = CalculatorRegistry::new(calculators)?;
        let resolver = JobStatusResolver::new(registry, config.calculator.clone());
        Ok(Self { provider, resolver })
    }

    /// Evaluate all jobs and return the composite report.
    ///
    /// With no job definitions configured this short-circuits to the fixed
    /// OK report without invoking any calculator.
    pub fn status_detail(&self) -> StatusDetail {
        let jobs = self.provider.job_definitions();
        if jobs.is_empty() {
            return aggregate(&jobs, &[]);
        }
        let statuses = self.resolver.resolve_all(&jobs);
        aggregate(&jobs, &statuses)
    }
}
