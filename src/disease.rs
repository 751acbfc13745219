//! Contract for disease-specific risk estimators
//!
//! Estimators (e.g. a stomach cancer score) consume the same profile but are
//! owned elsewhere. The analysis only attaches their output to its result.

use crate::profile::Profile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

/// One named input to a disease risk score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskContribution {
    pub label: String,
    pub value: f64,
    /// True when the contribution lowers risk
    pub is_positive: bool,
}

/// Output of a disease risk estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRisk {
    /// Relative score from 1 to 99
    pub score: u8,
    pub level: RiskLevel,
    pub advice: String,
    /// Ranked, largest first
    pub contributions: Vec<RiskContribution>,
}

/// Port for an externally implemented disease risk estimator
pub trait DiseaseRiskEstimator {
    fn estimate(&self, profile: &Profile) -> DiseaseRisk;
}

impl<F> DiseaseRiskEstimator for F
where
    F: Fn(&Profile) -> DiseaseRisk,
{
    fn estimate(&self, profile: &Profile) -> DiseaseRisk {
        self(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Pylori, Sex};

    #[test]
    fn test_closure_estimator() {
        let estimator = |profile: &Profile| DiseaseRisk {
            score: if profile.pylori == Pylori::Current { 60 } else { 10 },
            level: RiskLevel::Low,
            advice: String::new(),
            contributions: Vec::new(),
        };

        let mut profile = Profile::new(50, Sex::Male, 170.0, 65.0);
        assert_eq!(estimator.estimate(&profile).score, 10);
        profile.pylori = Pylori::Current;
        assert_eq!(estimator.estimate(&profile).score, 60);
    }

    #[test]
    fn test_serialized_level() {
        let risk = DiseaseRisk {
            score: 42,
            level: RiskLevel::Medium,
            advice: "Consider endoscopy".to_string(),
            contributions: vec![RiskContribution {
                label: "H. pylori infection".to_string(),
                value: 20.0,
                is_positive: false,
            }],
        };
        let json = serde_json::to_value(&risk).unwrap();
        assert_eq!(json["level"], "medium");
        assert_eq!(json["contributions"][0]["is_positive"], false);
    }
}
