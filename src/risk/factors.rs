//! Rule table mapping a profile to hazard-ratio factors
//!
//! Each rule inspects one part of the profile and emits at most one factor.
//! Rules run in a fixed order and the resulting sequence keeps that order.
//! Hazard ratios follow large Japanese cohort studies (JPHC and similar).

use crate::profile::{Alcohol, Diet, Exercise, Polypharmacy, Profile, Pylori, Sleep, Smoking, Social};
use serde::{Deserialize, Serialize};

/// Whether a factor is something the respondent could change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorClass {
    /// Behaviour or treatable condition; dropped from the idealized scenario
    Modifiable,
    /// Family or personal medical history
    Fixed,
    /// Protective habit already in place
    Protective,
}

impl FactorClass {
    /// Fixed and protective factors survive into the idealized scenario
    pub fn carries_into_ideal(&self) -> bool {
        matches!(self, FactorClass::Fixed | FactorClass::Protective)
    }
}

/// A named multiplicative adjustment to baseline mortality hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub label: String,
    /// >1 raises mortality hazard, <1 lowers it
    pub hazard_ratio: f64,
    pub class: FactorClass,
}

impl RiskFactor {
    pub fn new(label: impl Into<String>, hazard_ratio: f64, class: FactorClass) -> Self {
        Self {
            label: label.into(),
            hazard_ratio,
            class,
        }
    }

    fn risk(label: impl Into<String>, hazard_ratio: f64) -> Self {
        Self::new(label, hazard_ratio, FactorClass::Modifiable)
    }

    fn bonus(label: &str, hazard_ratio: f64) -> Self {
        Self::new(format!("{} (bonus)", label), hazard_ratio, FactorClass::Protective)
    }
}

type Rule = fn(&Profile) -> Option<RiskFactor>;

/// Lifestyle and treatable-condition rules, in evaluation order
const RULES: [Rule; 9] = [
    body_weight,
    alcohol,
    smoking,
    exercise,
    sleep,
    social,
    diet,
    polypharmacy,
    pylori,
];

/// History flags: (flag, label, hazard ratio, class)
type HistoryFlag = (fn(&Profile) -> bool, &'static str, f64, FactorClass);

const HISTORY_FLAGS: [HistoryFlag; 11] = [
    (|p| p.family_cancer, "family cancer history", 1.1, FactorClass::Fixed),
    (|p| p.long_lived_parent, "long-lived parent (bonus)", 0.85, FactorClass::Protective),
    (|p| p.allergy, "allergy", 1.0, FactorClass::Fixed),
    (|p| p.cancer_history, "cancer history", 1.4, FactorClass::Fixed),
    (|p| p.stroke_history, "stroke history", 2.0, FactorClass::Fixed),
    (|p| p.heart_disease_history, "heart disease history", 1.8, FactorClass::Fixed),
    (|p| p.diabetes, "diabetes", 1.75, FactorClass::Fixed),
    (|p| p.hypertension, "hypertension", 1.2, FactorClass::Fixed),
    (|p| p.dyslipidemia, "dyslipidemia", 1.1, FactorClass::Fixed),
    (|p| p.hepatitis, "hepatitis infection", 1.2, FactorClass::Modifiable),
    (|p| p.hpv, "HPV infection", 1.05, FactorClass::Modifiable),
];

/// Age from which low body weight is scored as frailty
pub const FRAILTY_AGE: u8 = 75;

/// Evaluate every rule against the profile
pub fn assess(profile: &Profile) -> Vec<RiskFactor> {
    let lifestyle = RULES.iter().filter_map(|rule| rule(profile));
    let history = HISTORY_FLAGS
        .iter()
        .filter(|(flag, ..)| flag(profile))
        .map(|&(_, label, hazard_ratio, class)| RiskFactor::new(label, hazard_ratio, class));

    lifestyle.chain(history).collect()
}

fn body_weight(profile: &Profile) -> Option<RiskFactor> {
    let Some(bmi) = profile.bmi() else {
        log::warn!(
            "Skipping BMI factor: height {} / weight {} not positive",
            profile.height,
            profile.weight
        );
        return None;
    };

    if bmi < 18.5 {
        // Reduced physiological reserve makes underweight more dangerous late in life
        if profile.age >= FRAILTY_AGE {
            Some(RiskFactor::risk("low body weight (frailty)", 1.8))
        } else {
            Some(RiskFactor::risk("low body weight", 1.6))
        }
    } else if bmi >= 30.0 {
        Some(RiskFactor::risk("obesity", 1.35))
    } else if bmi >= 25.0 {
        Some(RiskFactor::risk("overweight", 1.1))
    } else {
        None
    }
}

fn alcohol(profile: &Profile) -> Option<RiskFactor> {
    match profile.alcohol {
        Alcohol::Moderate => Some(RiskFactor::bonus("moderate drinking", 0.9)),
        Alcohol::Heavy => Some(RiskFactor::risk("heavy drinking", 1.55)),
        Alcohol::None => None,
    }
}

fn smoking(profile: &Profile) -> Option<RiskFactor> {
    match profile.smoking {
        Smoking::Never => Some(RiskFactor::bonus("never smoked", 0.85)),
        Smoking::Past => Some(RiskFactor::risk("former smoker", 1.35)),
        Smoking::Current => Some(current_smoker(profile.cigarettes_per_day)),
    }
}

/// Current smokers are stratified by daily cigarette count.
/// A zero count is treated as not reported.
fn current_smoker(cigarettes_per_day: Option<u32>) -> RiskFactor {
    match cigarettes_per_day {
        None | Some(0) => RiskFactor::risk("current smoker", 1.7),
        Some(count) if count < 10 => {
            RiskFactor::risk(format!("current smoker (light, {}/day)", count), 1.3)
        }
        Some(count) if count >= 20 => {
            RiskFactor::risk(format!("current smoker (heavy, {}/day)", count), 2.2)
        }
        Some(count) => RiskFactor::risk(format!("current smoker ({}/day)", count), 1.7),
    }
}

fn exercise(profile: &Profile) -> Option<RiskFactor> {
    match profile.exercise {
        Exercise::Yes => Some(RiskFactor::bonus("regular exercise", 0.85)),
        Exercise::No => Some(RiskFactor::risk("insufficient exercise", 1.2)),
    }
}

fn sleep(profile: &Profile) -> Option<RiskFactor> {
    match profile.sleep {
        Sleep::Short => Some(RiskFactor::risk("short sleep (<6h)", 1.12)),
        Sleep::Long => Some(RiskFactor::risk("long sleep (>9h)", 1.25)),
        Sleep::Optimal => None,
    }
}

fn social(profile: &Profile) -> Option<RiskFactor> {
    match profile.social {
        Social::Isolated => Some(RiskFactor::risk("social isolation", 1.3)),
        Social::Active => Some(RiskFactor::bonus("active social life", 0.95)),
        Social::Moderate => None,
    }
}

fn diet(profile: &Profile) -> Option<RiskFactor> {
    match profile.diet {
        Diet::Poor => Some(RiskFactor::risk("poor diet", 1.15)),
        Diet::Good => Some(RiskFactor::bonus("good diet", 0.95)),
        Diet::Average => None,
    }
}

fn polypharmacy(profile: &Profile) -> Option<RiskFactor> {
    match profile.polypharmacy {
        Polypharmacy::OneToFour => Some(RiskFactor::risk("regular medication", 1.1)),
        Polypharmacy::FivePlus => Some(RiskFactor::risk("polypharmacy (5+)", 1.3)),
        Polypharmacy::None => None,
    }
}

fn pylori(profile: &Profile) -> Option<RiskFactor> {
    match profile.pylori {
        Pylori::Negative => Some(RiskFactor::bonus("H. pylori negative", 0.98)),
        Pylori::Current => Some(RiskFactor::risk("H. pylori infection", 1.05)),
        // Neutral, but still listed
        Pylori::Eradicated => Some(RiskFactor::risk("H. pylori eradicated", 1.0)),
        Pylori::Unknown => None,
    }
}
