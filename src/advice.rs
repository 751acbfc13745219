//! Lifestyle recommendations derived from factor impacts
//!
//! Factors that shorten life are ranked costliest first and mapped to a
//! corrective action. At most `MAX_ACTIONS` distinct actions are suggested.

use crate::analysis::SimulationResult;
use crate::projection::FactorImpact;

/// Number of actions a recommendation names
pub const MAX_ACTIONS: usize = 2;

/// Corrective action for a factor label, if there is one.
/// History and neutral factors have none.
pub fn action_for(label: &str) -> Option<&'static str> {
    if label.starts_with("current smoker") {
        return Some("quit smoking");
    }

    let action = match label {
        "insufficient exercise" => "build an exercise habit",
        "heavy drinking" => "cut down on alcohol",
        "obesity" => "lose weight",
        "overweight" => "weight control",
        "poor diet" => "vegetables at every meal",
        "short sleep (<6h)" => "get enough sleep",
        "long sleep (>9h)" => "regular sleep rhythm",
        "social isolation" => "social participation",
        "H. pylori infection" => "H. pylori eradication",
        "diabetes" => "blood sugar control",
        "hypertension" => "blood pressure management",
        "dyslipidemia" => "lipid management",
        "low body weight" => "adequate nutrition",
        "low body weight (frailty)" => "nutrition and strength training",
        _ => return None,
    };
    Some(action)
}

/// Actions for the costliest actionable factors, worst first, without repeats
pub fn top_actions(factors: &[FactorImpact]) -> Vec<&'static str> {
    let mut costly: Vec<(&FactorImpact, &'static str)> = factors
        .iter()
        .filter(|f| f.impact < 0.0)
        .filter_map(|f| action_for(&f.label).map(|action| (f, action)))
        .collect();
    costly.sort_by(|(a, _), (b, _)| a.impact.total_cmp(&b.impact));

    let mut actions: Vec<&'static str> = Vec::with_capacity(MAX_ACTIONS);
    for (_, action) in costly {
        if actions.len() == MAX_ACTIONS {
            break;
        }
        if !actions.contains(&action) {
            actions.push(action);
        }
    }
    actions
}

/// Headline advice for one analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// No actionable risk factor
    KeepItUp,
    /// Working-age earnings can still be recovered
    RecoverEarnings {
        potential_gain: f64,
        actions: Vec<&'static str>,
    },
    /// Risks remain but no earnings are at stake (e.g. past retirement)
    ImproveHealth { actions: Vec<&'static str> },
}

impl Recommendation {
    pub fn actions(&self) -> &[&'static str] {
        match self {
            Recommendation::KeepItUp => &[],
            Recommendation::RecoverEarnings { actions, .. }
            | Recommendation::ImproveHealth { actions } => actions.as_slice(),
        }
    }
}

/// Pick the recommendation for an analysis result
pub fn recommend(result: &SimulationResult) -> Recommendation {
    let actions = top_actions(&result.factors);
    if actions.is_empty() {
        return Recommendation::KeepItUp;
    }

    let potential_gain = result.economic.potential_gain.value;
    if potential_gain > 0.0 {
        Recommendation::RecoverEarnings {
            potential_gain,
            actions,
        }
    } else {
        Recommendation::ImproveHealth { actions }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::KeepItUp => write!(
                f,
                "Excellent health management. Your current habits are a strong asset."
            ),
            Recommendation::RecoverEarnings {
                potential_gain,
                actions,
            } => write!(
                f,
                "You still have {:.0} in recoverable earnings. Focus on: {}.",
                potential_gain,
                actions.join(", ")
            ),
            Recommendation::ImproveHealth { actions } => write!(
                f,
                "Health is your biggest asset. To extend healthy life, review: {}.",
                actions.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::profile::{Alcohol, Diet, Exercise, Profile, Sex, Sleep, Smoking, Social};
    use crate::Assumptions;

    fn impact(label: &str, impact: f64) -> FactorImpact {
        FactorImpact {
            label: label.to_string(),
            hazard_ratio: 1.0,
            impact,
        }
    }

    #[test]
    fn test_action_lookup() {
        assert_eq!(action_for("current smoker (heavy, 40/day)"), Some("quit smoking"));
        assert_eq!(action_for("current smoker"), Some("quit smoking"));
        assert_eq!(action_for("low body weight (frailty)"), Some("nutrition and strength training"));
        assert_eq!(action_for("stroke history"), None);
        assert_eq!(action_for("never smoked (bonus)"), None);
    }

    #[test]
    fn test_worst_two_actions() {
        let factors = vec![
            impact("never smoked (bonus)", 1.5),
            impact("poor diet", -0.8),
            impact("stroke history", -6.0),
            impact("insufficient exercise", -1.2),
            impact("heavy drinking", -2.9),
        ];

        // Stroke history is costliest but has no action
        assert_eq!(
            top_actions(&factors),
            vec!["cut down on alcohol", "build an exercise habit"]
        );
    }

    #[test]
    fn test_no_actionable_factors() {
        let factors = vec![impact("regular exercise (bonus)", 1.4), impact("allergy", 0.0)];
        assert!(top_actions(&factors).is_empty());
        assert!(top_actions(&[]).is_empty());
    }

    #[test]
    fn test_all_protective_profile_is_praised() {
        let mut profile = Profile::new(40, Sex::Female, 160.0, 52.0);
        profile.alcohol = Alcohol::Moderate;
        profile.exercise = Exercise::Yes;
        profile.social = Social::Active;
        profile.diet = Diet::Good;

        let result = analyze(&profile, &Assumptions::default_reference());
        let recommendation = recommend(&result);
        assert_eq!(recommendation, Recommendation::KeepItUp);
        assert!(recommendation.actions().is_empty());
    }

    #[test]
    fn test_working_smoker_can_recover_earnings() {
        let mut profile = Profile::new(35, Sex::Male, 175.0, 70.0);
        profile.smoking = Smoking::Current;
        profile.cigarettes_per_day = Some(25);
        profile.sleep = Sleep::Short;

        let result = analyze(&profile, &Assumptions::default_reference());
        match recommend(&result) {
            Recommendation::RecoverEarnings {
                potential_gain,
                actions,
            } => {
                assert!(potential_gain > 0.0);
                assert_eq!(actions, vec!["quit smoking", "build an exercise habit"]);
            }
            other => panic!("unexpected recommendation: {:?}", other),
        }
    }

    #[test]
    fn test_retiree_gets_health_advice() {
        let mut profile = Profile::new(72, Sex::Female, 155.0, 50.0);
        profile.smoking = Smoking::Current;

        let result = analyze(&profile, &Assumptions::default_reference());
        let recommendation = recommend(&result);
        assert!(matches!(recommendation, Recommendation::ImproveHealth { .. }));
        assert_eq!(recommendation.actions()[0], "quit smoking");
        assert!(recommendation.to_string().contains("quit smoking"));
    }
}
