//! Expected future earnings over the remaining working years
//!
//! Each working year contributes `P(alive) * annual hours * hourly wage`,
//! evaluated at the mean, lower and upper wage.

use super::survival::SurvivalCurve;
use crate::assumptions::EconomicAssumptions;
use serde::{Deserialize, Serialize};

/// Monetary amount as a (mean, low, high) triple
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomicValue {
    /// Mean estimate
    pub value: f64,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl EconomicValue {
    /// Field-wise `max(0, self - other)`
    pub fn excess_over(&self, other: &EconomicValue) -> EconomicValue {
        EconomicValue {
            value: (self.value - other.value).max(0.0),
            min: (self.min - other.min).max(0.0),
            max: (self.max - other.max).max(0.0),
        }
    }
}

/// Values survival curves against the wage distribution
#[derive(Debug, Clone, Copy)]
pub struct EconomicValuator<'a> {
    economics: &'a EconomicAssumptions,
}

impl<'a> EconomicValuator<'a> {
    pub fn new(economics: &'a EconomicAssumptions) -> Self {
        Self { economics }
    }

    /// Expected earnings from `age` until retirement
    pub fn value(&self, age: u8, curve: &SurvivalCurve) -> EconomicValue {
        let hours = self.economics.annual_hours;
        let wages = &self.economics.wages;

        let mut total = EconomicValue::default();
        for year in 0..self.economics.years_to_work(age) {
            let alive = curve.probability(year);
            total.value += alive * wages.mean * hours;
            total.min += alive * wages.lower * hours;
            total.max += alive * wages.upper * hours;
        }
        total
    }

    /// Expected number of years spent alive and working before retirement
    pub fn expected_work_years(&self, age: u8, curve: &SurvivalCurve) -> f64 {
        (0..self.economics.years_to_work(age))
            .fold(0.0, |years, year| years + curve.probability(year))
    }
}
