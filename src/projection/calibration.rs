//! Align simulated life expectancy with the official table figure
//!
//! The yearly trapezoid simulation never exactly reproduces the published
//! remaining life expectancy. The gap at hazard ratio 1.0 is measured once
//! per (age, sex) and added to every simulated figure, so a neutral profile
//! always lands on the official value.

use super::survival::{LifeTableSimulator, SurvivalProjection};
use crate::profile::Sex;

/// Reported remaining life expectancy never drops below this many years
pub const MIN_LIFE_EXPECTANCY: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasCalibrator {
    official: f64,
    bias: f64,
}

impl BiasCalibrator {
    /// Run the neutral projection for (age, sex) and measure its bias.
    /// The neutral projection is returned as well, as it doubles as the
    /// population-average survival curve.
    pub fn calibrate(
        simulator: &LifeTableSimulator<'_>,
        age: u8,
        sex: Sex,
    ) -> (Self, SurvivalProjection) {
        let official = simulator.table().official_expectancy(age, sex);
        let baseline = simulator.simulate(age, sex, 1.0);
        let bias = official - baseline.life_expectancy;

        log::debug!(
            "Calibration at age {} {:?}: official {:.4}, simulated {:.4}, bias {:+.4}",
            age,
            sex,
            official,
            baseline.life_expectancy,
            bias
        );

        (Self { official, bias }, baseline)
    }

    /// Official remaining life expectancy at the calibrated age
    pub fn official(&self) -> f64 {
        self.official
    }

    /// Additive correction applied to every simulated figure
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Simulated life expectancy with the bias applied
    pub fn adjust(&self, simulated: f64) -> f64 {
        simulated + self.bias
    }

    /// Reported remaining life expectancy, floored at `MIN_LIFE_EXPECTANCY`
    pub fn remaining_life(&self, simulated: f64) -> f64 {
        self.adjust(simulated).max(MIN_LIFE_EXPECTANCY)
    }

    /// Years gained (+) or lost (-) relative to the official figure
    pub fn difference(&self, simulated: f64) -> f64 {
        self.adjust(simulated) - self.official
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::assumptions::LifeTable;
    use proptest::prelude::*;

    proptest! {
        /// Hazard ratio 1.0 plus the bias gives back the official table value
        #[test]
        fn calibration_identity(age in 0u8..=110, female in any::<bool>()) {
            let table = LifeTable::reference();
            let simulator = LifeTableSimulator::new(&table);
            let sex = if female { Sex::Female } else { Sex::Male };

            let (calibrator, _) = BiasCalibrator::calibrate(&simulator, age, sex);
            let neutral = simulator.simulate(age, sex, 1.0);
            let reproduced = calibrator.adjust(neutral.life_expectancy);

            prop_assert!(
                (reproduced - table.official_expectancy(age, sex)).abs() < 1e-9,
                "age {} {:?}: {} vs {}", age, sex, reproduced, table.official_expectancy(age, sex)
            );
        }
    }
}
