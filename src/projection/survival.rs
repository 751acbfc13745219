//! Discrete-time survival projection against a life table
//!
//! Annual mortality is scaled by a hazard ratio in the proportional-hazards
//! form `q_adj = 1 - (1 - q)^hr`, and survivors are rolled forward year by
//! year. Remaining life expectancy is the trapezoidal area under the curve.

use crate::assumptions::LifeTable;
use crate::profile::Sex;
use serde::{Deserialize, Serialize};

/// Absolute age at which every projection stops
pub const AGE_CEILING: usize = 115;

/// Projections stop once survival falls below this probability
pub const SURVIVAL_FLOOR: f64 = 1e-4;

/// Survival probabilities by year offset from the start age.
/// Non-increasing; the first element is the probability at the start age (1.0).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurvivalCurve(Vec<f64>);

impl SurvivalCurve {
    /// Probability of being alive `offset` years after the start age,
    /// zero past the end of the projection
    pub fn probability(&self, offset: usize) -> f64 {
        self.0.get(offset).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    /// Age at which survival first reaches 50%, interpolated linearly between
    /// the bracketing ages. `None` if the curve never gets there or the
    /// bracket is flat.
    pub fn median_age(&self, start_age: u8) -> Option<f64> {
        let i = self.0.iter().position(|&p| p <= 0.5)?;
        let prev = if i > 0 { self.0[i - 1] } else { 1.0 };
        let curr = self.0[i];

        // prev > 0.5 >= curr at a first crossing, so drop is positive for
        // any finite curve
        let drop = prev - curr;
        if drop <= 0.0 {
            return None;
        }

        Some(start_age as f64 + i as f64 - 1.0 + (prev - 0.5) / drop)
    }
}

impl From<Vec<f64>> for SurvivalCurve {
    fn from(probabilities: Vec<f64>) -> Self {
        SurvivalCurve(probabilities)
    }
}

/// Result of one projection
#[derive(Debug, Clone, PartialEq)]
pub struct SurvivalProjection {
    /// Uncalibrated remaining life expectancy in years
    pub life_expectancy: f64,
    pub curve: SurvivalCurve,
}

/// Hazard-adjusted one-year mortality, capped at certain death
pub fn adjusted_mortality(base_rate: f64, hazard_ratio: f64) -> f64 {
    (1.0 - (1.0 - base_rate).powf(hazard_ratio)).min(1.0)
}

/// Projects survival for one (age, sex, hazard ratio) triple
#[derive(Debug, Clone, Copy)]
pub struct LifeTableSimulator<'a> {
    table: &'a LifeTable,
}

impl<'a> LifeTableSimulator<'a> {
    pub fn new(table: &'a LifeTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a LifeTable {
        self.table
    }

    /// Roll survivors forward from `start_age` until the age ceiling or until
    /// survival becomes negligible. Ages past the end of the table are
    /// treated as certain death.
    pub fn simulate(&self, start_age: u8, sex: Sex, hazard_ratio: f64) -> SurvivalProjection {
        let start = (start_age as usize).min(self.table.max_age());

        let mut lx = 1.0;
        let mut life_expectancy = 0.0;
        let mut curve = Vec::with_capacity(AGE_CEILING.saturating_sub(start));

        for age in start..AGE_CEILING {
            let base_rate = self.table.mortality_rate(age, sex).unwrap_or(1.0);
            let q = adjusted_mortality(base_rate, hazard_ratio);

            let lx_next = lx * (1.0 - q);
            life_expectancy += (lx + lx_next) / 2.0;
            curve.push(lx);
            lx = lx_next;

            if lx < SURVIVAL_FLOOR {
                break;
            }
        }

        SurvivalProjection {
            life_expectancy,
            curve: SurvivalCurve(curve),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Survival never increases from one year to the next
        #[test]
        fn curve_is_non_increasing(age in 0u8..=110, female in any::<bool>(), hr in 0.4..2.8f64) {
            let table = LifeTable::reference();
            let sex = if female { Sex::Female } else { Sex::Male };
            let projection = LifeTableSimulator::new(&table).simulate(age, sex, hr);

            prop_assert!(projection.curve.probability(0) <= 1.0);
            for pair in projection.curve.as_slice().windows(2) {
                prop_assert!(pair[1] <= pair[0], "curve increased: {} -> {}", pair[0], pair[1]);
            }
        }
    }
}
