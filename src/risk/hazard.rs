//! Combine factor hazard ratios into one effective multiplier
//!
//! Independent risks multiplied together overstate combined mortality, so the
//! excess over 1.0 is dampened before clamping. Protective products are never
//! dampened.

use super::factors::RiskFactor;

/// Share of the excess hazard (product - 1.0) that is kept
pub const DAMPENING: f64 = 0.8;

/// Allowed range for an effective hazard ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardBounds {
    pub floor: f64,
    pub cap: f64,
}

impl HazardBounds {
    /// Bounds for the respondent's own scenario
    pub const PRIMARY: HazardBounds = HazardBounds { floor: 0.4, cap: 2.8 };

    /// Tighter cap for the best-case scenario
    pub const IDEAL: HazardBounds = HazardBounds { floor: 0.4, cap: 2.5 };

    pub fn clamp(&self, hazard_ratio: f64) -> f64 {
        hazard_ratio.min(self.cap).max(self.floor)
    }
}

/// Plain product of all factor hazard ratios (1.0 for no factors)
pub fn raw_product(factors: &[RiskFactor]) -> f64 {
    factors.iter().map(|f| f.hazard_ratio).product()
}

/// Shrink the portion of a combined ratio above 1.0
pub fn dampen(hazard_ratio: f64) -> f64 {
    if hazard_ratio > 1.0 {
        1.0 + (hazard_ratio - 1.0) * DAMPENING
    } else {
        hazard_ratio
    }
}

/// Dampen then clamp an already-multiplied hazard ratio
pub fn finalize(product: f64, bounds: HazardBounds) -> f64 {
    bounds.clamp(dampen(product))
}

/// Effective hazard ratio for a factor set
pub fn aggregate(factors: &[RiskFactor], bounds: HazardBounds) -> f64 {
    finalize(raw_product(factors), bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::FactorClass;
    use approx::assert_relative_eq;

    fn factors(ratios: &[f64]) -> Vec<RiskFactor> {
        ratios
            .iter()
            .map(|&hr| RiskFactor::new("f", hr, FactorClass::Modifiable))
            .collect()
    }

    #[test]
    fn test_empty_set_is_neutral() {
        assert_eq!(aggregate(&[], HazardBounds::PRIMARY), 1.0);
    }

    #[test]
    fn test_dampening_near_neutral() {
        // 0.85 * 1.2 = 1.02 -> 1 + 0.02 * 0.8
        let hr = aggregate(&factors(&[0.85, 1.2]), HazardBounds::PRIMARY);
        assert_relative_eq!(hr, 1.016, epsilon = 1e-12);
    }

    #[test]
    fn test_protective_product_not_dampened() {
        let hr = aggregate(&factors(&[0.85, 0.9, 0.95]), HazardBounds::PRIMARY);
        assert_relative_eq!(hr, 0.85 * 0.9 * 0.95, epsilon = 1e-12);
    }

    #[test]
    fn test_clamps() {
        let heavy = factors(&[2.2, 2.0, 1.8, 1.75]);
        assert_eq!(aggregate(&heavy, HazardBounds::PRIMARY), 2.8);
        assert_eq!(aggregate(&heavy, HazardBounds::IDEAL), 2.5);

        let protective = factors(&[0.85, 0.85, 0.85, 0.85, 0.85, 0.85]);
        assert_eq!(aggregate(&protective, HazardBounds::PRIMARY), 0.4);
    }

    #[test]
    fn test_dampen_identity_at_one() {
        assert_eq!(dampen(1.0), 1.0);
        assert_eq!(dampen(0.7), 0.7);
        assert_relative_eq!(dampen(2.0), 1.8, epsilon = 1e-12);
    }
}
