//! Output structures for a profile analysis

use crate::disease::DiseaseRisk;
use crate::projection::{EconomicValue, FactorImpact};
use serde::{Deserialize, Serialize};

/// Oldest age included in the display curve
pub const DISPLAY_AGE_LIMIT: u32 = 105;

/// One point of the paired survival chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub age: u32,
    /// Respondent's survival probability
    pub survival: f64,
    /// Population-average survival probability
    pub average_survival: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicSummary {
    /// Expected earnings lost against the population average
    pub current_loss: EconomicValue,
    /// Expected earnings recoverable by removing modifiable risks
    pub potential_gain: EconomicValue,
    /// Expected working years for the population average
    pub work_years_average: f64,
    /// Expected working years for the respondent
    pub work_years_current: f64,
}

/// Complete analysis of one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Remaining life expectancy in years (2 decimals)
    pub life_expectancy: f64,
    /// Expected age at death (1 decimal)
    pub lifespan: f64,
    /// Age at which survival probability reaches 50% (1 decimal)
    pub median_age: f64,
    /// Difference from the official average in years (2 decimals)
    pub difference: f64,
    /// Official remaining life expectancy at this age (2 decimals)
    pub official: f64,
    /// Effective hazard ratio of the respondent's scenario
    pub hazard_ratio: f64,
    /// Effective hazard ratio with modifiable risks removed
    pub ideal_hazard_ratio: f64,
    pub curve: Vec<CurvePoint>,
    pub economic: EconomicSummary,
    /// Most beneficial first
    pub factors: Vec<FactorImpact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_risk: Option<DiseaseRisk>,
}

impl SimulationResult {
    /// Attach an already-computed disease risk estimate
    pub fn with_disease_risk(mut self, disease_risk: DiseaseRisk) -> Self {
        self.disease_risk = Some(disease_risk);
        self
    }
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(42.5449, 2), 42.54);
        assert_eq!(round_to(81.25, 1), 81.3);
        assert_eq!(round_to(-0.126, 2), -0.13);
        assert_eq!(round_to(3.0, 2), 3.0);
    }
}
