// SPDX-License-Identifier: MIT
//! Calculator registry — maps calculator keys to registered calculators and
//! designates the default.

use crate::status::calculator::JobStatusCalculator;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Key of the calculator used when a job type has no (valid) override.
pub const DEFAULT_CALCULATOR_KEY: &str = "warningOnLastJobFailed";

/// Fatal configuration errors raised while building the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No calculator registered under [`DEFAULT_CALCULATOR_KEY`]. The system
    /// must not start serving health checks without a default.
    #[error("no default job status calculator registered (expected key \"warningOnLastJobFailed\")")]
    MissingDefaultCalculator,
}

/// Immutable index of the injected calculators, built once at startup.
///
/// Read-only after construction; safe to share across concurrent
/// health-check invocations without locking.
pub struct CalculatorRegistry {
    calculators: HashMap<String, Arc<dyn JobStatusCalculator>>,
    default: Arc<dyn JobStatusCalculator>,
}

impl CalculatorRegistry {
    /// Index `calculators` by key.
    ///
    /// A duplicate key is a configuration mistake, not a fatal one: the last
    /// registration wins and a warning is logged. A missing default
    /// calculator is fatal.
    pub fn new(calculators: Vec<Arc<dyn JobStatusCalculator>>) -> Result<Self, RegistryError> {
        let mut by_key: HashMap<String, Arc<dyn JobStatusCalculator>> = HashMap::new();
        for calculator in calculators {
            let key = calculator.key().to_string();
            if by_key.insert(key.clone(), calculator).is_some() {
                warn!(key = %key, "duplicate job status calculator key, last registration wins");
            }
        }

        let default = by_key
            .get(DEFAULT_CALCULATOR_KEY)
            .cloned()
            .ok_or(RegistryError::MissingDefaultCalculator)?;

        Ok(Self {
            calculators: by_key,
            default,
        })
    }

    /// Look up a calculator by its exact key.
    pub fn resolve(&self, key: &str) -> Option<&Arc<dyn JobStatusCalculator>> {
        self.calculators.get(key)
    }

    /// The calculator used when no override applies.
    pub fn default_calculator(&self) -> &Arc<dyn JobStatusCalculator> {
        &self.default
    }
}
