//! Standalone effect of each factor on remaining life expectancy
//!
//! Every factor is projected on its own (its hazard ratio alone, no
//! aggregation or dampening), so impacts ignore interactions and do not sum
//! to the combined difference.

use super::calibration::BiasCalibrator;
use super::survival::LifeTableSimulator;
use crate::profile::Sex;
use crate::risk::RiskFactor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorImpact {
    pub label: String,
    pub hazard_ratio: f64,
    /// Years of life gained (+) or lost (-) against the official average
    pub impact: f64,
}

/// Impacts for every factor, most beneficial first. Ties keep evaluation order.
pub fn decompose(
    simulator: &LifeTableSimulator<'_>,
    calibrator: &BiasCalibrator,
    age: u8,
    sex: Sex,
    factors: &[RiskFactor],
) -> Vec<FactorImpact> {
    let mut impacts: Vec<FactorImpact> = factors
        .iter()
        .map(|factor| {
            let projection = simulator.simulate(age, sex, factor.hazard_ratio);
            FactorImpact {
                label: factor.label.clone(),
                hazard_ratio: factor.hazard_ratio,
                impact: calibrator.difference(projection.life_expectancy),
            }
        })
        .collect();

    impacts.sort_by(|a, b| b.impact.total_cmp(&a.impact));
    impacts
}
