//! Survival projection, calibration and valuation

mod calibration;
mod earnings;
mod impact;
mod survival;

pub use calibration::{BiasCalibrator, MIN_LIFE_EXPECTANCY};
pub use earnings::{EconomicValuator, EconomicValue};
pub use impact::{decompose, FactorImpact};
pub use survival::{
    adjusted_mortality, LifeTableSimulator, SurvivalCurve, SurvivalProjection, AGE_CEILING,
    SURVIVAL_FLOOR,
};
