//! Full profile analysis
//!
//! profile -> factors -> effective hazard ratio -> {baseline, respondent,
//! idealized} projections -> calibration -> factor impacts and earnings.
//! A pure function of the profile and the assumption bundle.

use super::result::{round_to, CurvePoint, EconomicSummary, SimulationResult, DISPLAY_AGE_LIMIT};
use crate::assumptions::Assumptions;
use crate::profile::Profile;
use crate::projection::{decompose, BiasCalibrator, EconomicValuator, LifeTableSimulator};
use crate::risk::{self, HazardBounds};

/// Analyze one profile against the given assumptions
pub fn analyze(profile: &Profile, assumptions: &Assumptions) -> SimulationResult {
    let age = profile.age;
    let sex = profile.sex;

    let simulator = LifeTableSimulator::new(&assumptions.life_table);
    let valuator = EconomicValuator::new(&assumptions.economics);

    let factors = risk::assess(profile);
    let hazard_ratio = risk::aggregate(&factors, HazardBounds::PRIMARY);
    let ideal_hazard_ratio = risk::ideal_hazard_ratio(profile, &factors);

    log::debug!(
        "Profile age {} {:?}: {} factors, raw product {:.4}, effective HR {:.4}, ideal HR {:.4}",
        age,
        sex,
        factors.len(),
        risk::raw_product(&factors),
        hazard_ratio,
        ideal_hazard_ratio
    );

    let (calibrator, baseline) = BiasCalibrator::calibrate(&simulator, age, sex);
    let user = simulator.simulate(age, sex, hazard_ratio);
    let ideal = simulator.simulate(age, sex, ideal_hazard_ratio);

    let life_expectancy = calibrator.remaining_life(user.life_expectancy);
    let difference = life_expectancy - calibrator.official();
    let median_age = user
        .curve
        .median_age(age)
        .unwrap_or(age as f64 + life_expectancy);

    let earnings_current = valuator.value(age, &user.curve);
    let earnings_average = valuator.value(age, &baseline.curve);
    let earnings_ideal = valuator.value(age, &ideal.curve);

    let economic = EconomicSummary {
        current_loss: earnings_average.excess_over(&earnings_current),
        potential_gain: earnings_ideal.excess_over(&earnings_current),
        work_years_average: valuator.expected_work_years(age, &baseline.curve),
        work_years_current: valuator.expected_work_years(age, &user.curve),
    };

    let curve = user
        .curve
        .iter()
        .enumerate()
        .map(|(offset, &survival)| CurvePoint {
            age: age as u32 + offset as u32,
            survival,
            average_survival: baseline.curve.probability(offset),
        })
        .take_while(|point| point.age <= DISPLAY_AGE_LIMIT)
        .collect();

    let factors = decompose(&simulator, &calibrator, age, sex, &factors);

    SimulationResult {
        life_expectancy: round_to(life_expectancy, 2),
        lifespan: round_to(age as f64 + life_expectancy, 1),
        median_age: round_to(median_age, 1),
        difference: round_to(difference, 2),
        official: round_to(calibrator.official(), 2),
        hazard_ratio,
        ideal_hazard_ratio,
        curve,
        economic,
        factors,
        disease_risk: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Alcohol, Diet, Exercise, Polypharmacy, Pylori, Sex, Sleep, Smoking, Social};
    use approx::assert_relative_eq;

    fn near_neutral() -> Profile {
        Profile::new(40, Sex::Male, 170.0, 65.0)
    }

    fn high_risk() -> Profile {
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
        profile.polypharmacy = Polypharmacy::FivePlus;
        profile
    }

    fn all_protective() -> Profile {
        let mut profile = Profile::new(40, Sex::Female, 160.0, 52.0);
        profile.alcohol = Alcohol::Moderate;
        profile.exercise = Exercise::Yes;
        profile.social = Social::Active;
        profile.diet = Diet::Good;
        profile.pylori = Pylori::Negative;
        profile.long_lived_parent = true;
        profile
    }

    #[test]
    fn test_near_neutral_scenario() {
        let result = analyze(&near_neutral(), &Assumptions::default_reference());

        assert_eq!(result.factors.len(), 2);
        assert_relative_eq!(result.hazard_ratio, 1.016, epsilon = 1e-12);
        assert_eq!(result.official, 42.54);

        // Slightly below the official average
        assert!(result.difference < 0.0, "difference {}", result.difference);
        assert!(result.difference > -1.0, "difference {}", result.difference);
        assert!(result.life_expectancy < result.official);

        assert_eq!(result.factors[0].label, "never smoked (bonus)");
        assert!(result.factors[0].impact > 0.0);
        assert_eq!(result.factors[1].label, "insufficient exercise");
        assert!(result.factors[1].impact < 0.0);
    }

    #[test]
    fn test_high_risk_scenario_hits_ceiling() {
        let result = analyze(&high_risk(), &Assumptions::default_reference());

        assert_eq!(result.hazard_ratio, HazardBounds::PRIMARY.cap);
        assert_eq!(result.ideal_hazard_ratio, HazardBounds::IDEAL.cap);
        assert_eq!(result.factors.len(), 9);
        assert!(result.difference < -3.0, "difference {}", result.difference);

        // Past retirement: no earnings at stake
        assert_eq!(result.economic.current_loss.value, 0.0);
        assert_eq!(result.economic.potential_gain.value, 0.0);
        assert_eq!(result.economic.work_years_current, 0.0);
    }

    #[test]
    fn test_all_protective_has_nothing_to_gain() {
        let result = analyze(&all_protective(), &Assumptions::default_reference());

        assert!(result.hazard_ratio < 1.0);
        assert_eq!(result.ideal_hazard_ratio, result.hazard_ratio);
        assert_eq!(result.economic.potential_gain.value, 0.0);
        assert_eq!(result.economic.current_loss.value, 0.0);
        assert!(result.difference > 0.0);
        assert!(result.economic.work_years_current > result.economic.work_years_average);
    }

    #[test]
    fn test_risky_worker_has_loss_and_gain() {
        let mut profile = Profile::new(35, Sex::Male, 175.0, 95.0);
        profile.smoking = Smoking::Current;
        profile.cigarettes_per_day = Some(25);
        profile.alcohol = Alcohol::Heavy;

        let result = analyze(&profile, &Assumptions::default_reference());
        let loss = result.economic.current_loss;
        let gain = result.economic.potential_gain;

        assert!(loss.value > 0.0);
        assert!(loss.min < loss.value && loss.value < loss.max);
        assert!(gain.value > loss.value);
        assert!(result.economic.work_years_current < result.economic.work_years_average);
    }

    #[test]
    fn test_display_curve() {
        let profile = Profile::new(90, Sex::Female, 150.0, 45.0);
        let result = analyze(&profile, &Assumptions::default_reference());

        assert_eq!(result.curve[0].age, 90);
        assert_eq!(result.curve[0].survival, 1.0);
        assert_eq!(result.curve[0].average_survival, 1.0);
        assert!(result.curve.last().unwrap().age <= DISPLAY_AGE_LIMIT);
        assert!(result
            .curve
            .windows(2)
            .all(|pair| pair[1].age == pair[0].age + 1));
    }

    #[test]
    fn test_median_and_lifespan_are_consistent() {
        let result = analyze(&near_neutral(), &Assumptions::default_reference());

        assert_relative_eq!(result.lifespan, 40.0 + result.life_expectancy, epsilon = 0.051);
        assert!(result.median_age > 40.0);
        // Median of a left-skewed lifetime distribution sits above its mean
        assert!(result.median_age > result.lifespan - 1.0);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let assumptions = Assumptions::default_reference();
        let profile = high_risk();

        let first = analyze(&profile, &assumptions);
        let second = analyze(&profile, &assumptions);
        assert_eq!(first, second);
    }

    #[test]
    fn test_profile_is_not_mutated() {
        let profile = near_neutral();
        let before = profile.clone();
        let _ = analyze(&profile, &Assumptions::default_reference());
        assert_eq!(profile, before);
    }
}
