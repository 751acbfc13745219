//! Best-achievable hazard ratio with modifiable risks removed
//!
//! Fixed history and protective habits already in place are kept as observed.
//! Every modifiable risk factor is dropped, and each non-optimal behaviour
//! earns a flat improvement discount. Discounts do not depend on the hazard
//! ratio of the factor they replace.

use super::factors::RiskFactor;
use super::hazard::{finalize, HazardBounds};
use crate::profile::{Alcohol, Diet, Exercise, Profile, Sleep, Smoking, Social};

pub const QUIT_SMOKING_DISCOUNT: f64 = 0.85;
pub const START_EXERCISE_DISCOUNT: f64 = 0.85;
pub const REDUCE_DRINKING_DISCOUNT: f64 = 0.9;
pub const FIX_SLEEP_DISCOUNT: f64 = 0.95;
pub const IMPROVE_DIET_DISCOUNT: f64 = 0.95;
pub const RECONNECT_SOCIALLY_DISCOUNT: f64 = 0.9;

/// Improvement discounts applicable to this profile, in evaluation order
pub fn improvement_discounts(profile: &Profile) -> Vec<f64> {
    let candidates = [
        (profile.smoking != Smoking::Never, QUIT_SMOKING_DISCOUNT),
        (profile.exercise != Exercise::Yes, START_EXERCISE_DISCOUNT),
        (profile.alcohol == Alcohol::Heavy, REDUCE_DRINKING_DISCOUNT),
        (profile.sleep != Sleep::Optimal, FIX_SLEEP_DISCOUNT),
        (profile.diet == Diet::Poor, IMPROVE_DIET_DISCOUNT),
        (profile.social == Social::Isolated, RECONNECT_SOCIALLY_DISCOUNT),
    ];

    candidates
        .into_iter()
        .filter_map(|(applies, discount)| applies.then_some(discount))
        .collect()
}

/// Effective hazard ratio for the idealized scenario, within `HazardBounds::IDEAL`
pub fn ideal_hazard_ratio(profile: &Profile, factors: &[RiskFactor]) -> f64 {
    let kept: f64 = factors
        .iter()
        .filter(|f| f.class.carries_into_ideal())
        .map(|f| f.hazard_ratio)
        .product();

    let product = improvement_discounts(profile)
        .into_iter()
        .fold(kept, |hr, discount| hr * discount);

    finalize(product, HazardBounds::IDEAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Sex;
    use crate::risk::{aggregate, assess};
    use approx::assert_relative_eq;

    #[test]
    fn test_near_neutral_profile() {
        // Never smoked (kept) and no exercise (dropped, discounted)
        let profile = Profile::new(40, Sex::Male, 170.0, 65.0);
        let factors = assess(&profile);

        assert_eq!(improvement_discounts(&profile), vec![START_EXERCISE_DISCOUNT]);
        assert_relative_eq!(
            ideal_hazard_ratio(&profile, &factors),
            0.85 * 0.85,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_fixed_history_is_kept() {
        let mut profile = Profile::new(70, Sex::Male, 170.0, 65.0);
        profile.smoking = Smoking::Current;
        profile.cigarettes_per_day = Some(40);
        profile.stroke_history = true;
        profile.heart_disease_history = true;
        profile.diabetes = true;
        profile.exercise = Exercise::No;
        profile.sleep = Sleep::Short;
        profile.diet = Diet::Poor;
        profile.social = Social::Isolated;

        let factors = assess(&profile);
        let raw: f64 = 2.0 * 1.8 * 1.75 * 0.85 * 0.85 * 0.95 * 0.95 * 0.9;
        let expected = 1.0 + (raw - 1.0) * 0.8;

        let ideal = ideal_hazard_ratio(&profile, &factors);
        assert_relative_eq!(ideal, expected.min(2.5), epsilon = 1e-12);
        assert!(ideal < aggregate(&factors, HazardBounds::PRIMARY));
    }

    #[test]
    fn test_ideal_cap() {
        let mut profile = Profile::new(60, Sex::Female, 160.0, 55.0);
        profile.exercise = Exercise::Yes;
        profile.stroke_history = true;
        profile.heart_disease_history = true;
        profile.diabetes = true;
        profile.cancer_history = true;

        let factors = assess(&profile);
        assert_eq!(ideal_hazard_ratio(&profile, &factors), 2.5);
    }

    #[test]
    fn test_already_optimal_profile_matches_primary() {
        let mut profile = Profile::new(40, Sex::Female, 160.0, 52.0);
        profile.alcohol = Alcohol::Moderate;
        profile.exercise = Exercise::Yes;
        profile.social = Social::Active;
        profile.diet = Diet::Good;

        let factors = assess(&profile);
        assert!(improvement_discounts(&profile).is_empty());
        assert_eq!(
            ideal_hazard_ratio(&profile, &factors),
            aggregate(&factors, HazardBounds::PRIMARY)
        );
    }
}
