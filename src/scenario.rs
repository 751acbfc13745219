//! Analysis runner for single and batch profile analyses
//!
//! Holds one assumption bundle and an optional disease risk estimator, then
//! analyzes any number of profiles against them.

use crate::analysis::{analyze, SimulationResult};
use crate::disease::DiseaseRiskEstimator;
use crate::error::Result;
use crate::{Assumptions, Profile};
use rayon::prelude::*;
use std::sync::Arc;

/// Pre-loaded analysis runner
///
/// # Example
/// ```ignore
/// let runner = AnalysisRunner::from_csv()?;
/// let results = runner.run_batch(&profiles);
/// ```
#[derive(Clone)]
pub struct AnalysisRunner {
    assumptions: Assumptions,
    estimator: Option<Arc<dyn DiseaseRiskEstimator + Send + Sync>>,
}

impl AnalysisRunner {
    /// Create runner with the in-memory reference assumptions
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default_reference())
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_csv()?))
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?))
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            assumptions,
            estimator: None,
        }
    }

    /// Attach a disease risk estimator whose output is merged into every result
    pub fn with_estimator<E>(mut self, estimator: E) -> Self
    where
        E: DiseaseRiskEstimator + Send + Sync + 'static,
    {
        self.estimator = Some(Arc::new(estimator));
        self
    }

    /// Analyze a single profile
    pub fn run(&self, profile: &Profile) -> SimulationResult {
        let result = analyze(profile, &self.assumptions);
        match &self.estimator {
            Some(estimator) => result.with_disease_risk(estimator.estimate(profile)),
            None => result,
        }
    }

    /// Analyze many profiles in parallel; results keep input order
    pub fn run_batch(&self, profiles: &[Profile]) -> Vec<SimulationResult> {
        log::info!("Analyzing {} profiles", profiles.len());
        profiles.par_iter().map(|profile| self.run(profile)).collect()
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Mutable access for sensitivity runs
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }
}

impl Default for AnalysisRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnalysisRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisRunner")
            .field("assumptions", &self.assumptions)
            .field("estimator", &self.estimator.is_some())
            .finish()
    }
}
