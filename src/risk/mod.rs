//! Profile-driven hazard ratios: factor rules, aggregation and the idealized scenario

mod factors;
mod hazard;
mod ideal;

pub use factors::{assess, FactorClass, RiskFactor, FRAILTY_AGE};
pub use hazard::{aggregate, dampen, finalize, raw_product, HazardBounds, DAMPENING};
pub use ideal::{ideal_hazard_ratio, improvement_discounts};
