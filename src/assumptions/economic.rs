//! Labour-market assumptions used to value survival over working years

use serde::{Deserialize, Serialize};

/// Hourly wage distribution (currency units per hour)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageStats {
    pub mean: f64,
    /// Lower bound of the wage range
    pub lower: f64,
    /// Upper bound of the wage range
    pub upper: f64,
}

impl Default for WageStats {
    fn default() -> Self {
        Self {
            mean: 2_160.0,
            lower: 1_450.0,
            upper: 3_300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicAssumptions {
    /// Official retirement age; earnings stop accruing here
    pub retirement_age: u8,

    /// Hours worked per year
    pub annual_hours: f64,

    pub wages: WageStats,
}

impl EconomicAssumptions {
    /// Working years left before retirement (zero once retired)
    pub fn years_to_work(&self, age: u8) -> usize {
        self.retirement_age.saturating_sub(age) as usize
    }
}

impl Default for EconomicAssumptions {
    fn default() -> Self {
        Self {
            retirement_age: 65,
            annual_hours: 1_800.0,
            wages: WageStats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_to_work() {
        let economics = EconomicAssumptions::default();
        assert_eq!(economics.years_to_work(40), 25);
        assert_eq!(economics.years_to_work(65), 0);
        assert_eq!(economics.years_to_work(80), 0);
    }
}
