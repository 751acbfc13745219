//! Lifestyle and medical profile matching the questionnaire input format

use serde::{Deserialize, Serialize};

/// Sex used for life table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alcohol {
    None,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoking {
    Never,
    Past,
    Current,
}

/// Exercise at least twice a week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sleep {
    /// 6 to 9 hours
    Optimal,
    /// Under 6 hours
    Short,
    /// Over 9 hours
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Social {
    Active,
    Moderate,
    Isolated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Good,
    Average,
    Poor,
}

/// Helicobacter pylori status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pylori {
    Unknown,
    Negative,
    Eradicated,
    Current,
}

/// Atrophic gastritis status. Not used by the mortality model; carried for
/// disease-specific estimators that consume the same profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtrophicGastritis {
    Unknown,
    Yes,
    No,
}

/// Number of regularly taken prescription drugs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polypharmacy {
    #[serde(rename = "0")]
    None,
    #[serde(rename = "1-4")]
    OneToFour,
    #[serde(rename = "5+")]
    FivePlus,
}

macro_rules! wire_names {
    ($($ty:ident { $($variant:ident => $name:literal),+ $(,)? })+) => {
        $(
            impl $ty {
                /// Name used in profile files
                pub fn as_str(&self) -> &'static str {
                    match self {
                        $($ty::$variant => $name),+
                    }
                }

                /// Parse from the name used in profile files
                pub fn parse(value: &str) -> Option<Self> {
                    match value.trim() {
                        $($name => Some($ty::$variant),)+
                        _ => None,
                    }
                }
            }
        )+
    };
}

wire_names! {
    Sex { Male => "male", Female => "female" }
    Alcohol { None => "none", Moderate => "moderate", Heavy => "heavy" }
    Smoking { Never => "never", Past => "past", Current => "current" }
    Exercise { Yes => "yes", No => "no" }
    Sleep { Optimal => "optimal", Short => "short", Long => "long" }
    Social { Active => "active", Moderate => "moderate", Isolated => "isolated" }
    Diet { Good => "good", Average => "average", Poor => "poor" }
    Pylori { Unknown => "unknown", Negative => "negative", Eradicated => "eradicated", Current => "current" }
    AtrophicGastritis { Unknown => "unknown", Yes => "yes", No => "no" }
    Polypharmacy { None => "0", OneToFour => "1-4", FivePlus => "5+" }
}

/// A single respondent's profile.
///
/// The engine treats this as read-only input. Range checks (age 20-100,
/// positive height and weight) belong to whoever builds the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in completed years
    pub age: u8,

    pub sex: Sex,

    /// Height in centimetres
    pub height: f64,

    /// Weight in kilograms
    pub weight: f64,

    pub alcohol: Alcohol,
    pub smoking: Smoking,

    /// Only meaningful for current smokers
    #[serde(default)]
    pub cigarettes_per_day: Option<u32>,

    pub exercise: Exercise,
    pub sleep: Sleep,
    pub social: Social,
    pub diet: Diet,
    pub pylori: Pylori,

    #[serde(default = "default_atrophic_gastritis")]
    pub atrophic_gastritis: AtrophicGastritis,

    pub polypharmacy: Polypharmacy,

    // Family history
    #[serde(default)]
    pub family_cancer: bool,
    #[serde(default)]
    pub long_lived_parent: bool,
    #[serde(default)]
    pub allergy: bool,

    // Personal medical history
    #[serde(default)]
    pub cancer_history: bool,
    #[serde(default)]
    pub stroke_history: bool,
    #[serde(default)]
    pub heart_disease_history: bool,
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default)]
    pub hypertension: bool,
    #[serde(default)]
    pub dyslipidemia: bool,
    #[serde(default)]
    pub hepatitis: bool,
    #[serde(default)]
    pub hpv: bool,
}

fn default_atrophic_gastritis() -> AtrophicGastritis {
    AtrophicGastritis::Unknown
}

impl Profile {
    /// Create a profile with the questionnaire's starting answers: no alcohol,
    /// never smoked, no regular exercise, average habits and no history.
    pub fn new(age: u8, sex: Sex, height: f64, weight: f64) -> Self {
        Self {
            age,
            sex,
            height,
            weight,
            alcohol: Alcohol::None,
            smoking: Smoking::Never,
            cigarettes_per_day: None,
            exercise: Exercise::No,
            sleep: Sleep::Optimal,
            social: Social::Moderate,
            diet: Diet::Average,
            pylori: Pylori::Unknown,
            atrophic_gastritis: AtrophicGastritis::Unknown,
            polypharmacy: Polypharmacy::None,
            family_cancer: false,
            long_lived_parent: false,
            allergy: false,
            cancer_history: false,
            stroke_history: false,
            heart_disease_history: false,
            diabetes: false,
            hypertension: false,
            dyslipidemia: false,
            hepatitis: false,
            hpv: false,
        }
    }

    /// Body mass index, or `None` when height or weight is not positive
    pub fn bmi(&self) -> Option<f64> {
        if self.height > 0.0 && self.weight > 0.0 {
            let metres = self.height / 100.0;
            Some(self.weight / (metres * metres))
        } else {
            None
        }
    }
}
