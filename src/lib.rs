//! Longevity Engine - Personalized life expectancy and earnings-at-risk projection
//!
//! This library provides:
//! - Profile-driven hazard ratios from lifestyle, medical and history factors
//! - Life-table survival simulation calibrated to official expectancies
//! - Expected earnings lost to excess mortality and recoverable by lifestyle change
//! - Per-factor attribution of years gained or lost, with lifestyle recommendations
//! - Parallel batch analysis over many profiles

pub mod advice;
pub mod analysis;
pub mod assumptions;
pub mod disease;
pub mod error;
pub mod profile;
pub mod projection;
pub mod risk;
pub mod scenario;

// Re-export commonly used types
pub use advice::{recommend, Recommendation};
pub use analysis::{analyze, SimulationResult};
pub use assumptions::{Assumptions, EconomicAssumptions, LifeTable, WageStats};
pub use disease::{DiseaseRisk, DiseaseRiskEstimator};
pub use error::DataError;
pub use profile::{Profile, Sex};
pub use projection::{EconomicValue, FactorImpact, SurvivalCurve};
pub use risk::{FactorClass, HazardBounds, RiskFactor};
pub use scenario::AnalysisRunner;
