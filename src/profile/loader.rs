//! Load profiles from CSV batches or single JSON documents

use super::data::{
    Alcohol, AtrophicGastritis, Diet, Exercise, Polypharmacy, Profile, Pylori, Sex, Sleep,
    Smoking, Social,
};
use crate::error::{DataError, Result};
use csv::Reader;
use std::fs::File;
use std::path::Path;

/// Default location of the sample profile batch
pub const DEFAULT_PROFILES_PATH: &str = "data/profiles.csv";

/// Raw CSV row; categorical columns are validated in `to_profile`
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    age: u8,
    sex: String,
    height: f64,
    weight: f64,
    alcohol: String,
    smoking: String,
    #[serde(default)]
    cigarettes_per_day: Option<u32>,
    exercise: String,
    sleep: String,
    social: String,
    diet: String,
    pylori: String,
    #[serde(default)]
    atrophic_gastritis: Option<String>,
    polypharmacy: String,
    #[serde(default)]
    family_cancer: bool,
    #[serde(default)]
    long_lived_parent: bool,
    #[serde(default)]
    allergy: bool,
    #[serde(default)]
    cancer_history: bool,
    #[serde(default)]
    stroke_history: bool,
    #[serde(default)]
    heart_disease_history: bool,
    #[serde(default)]
    diabetes: bool,
    #[serde(default)]
    hypertension: bool,
    #[serde(default)]
    dyslipidemia: bool,
    #[serde(default)]
    hepatitis: bool,
    #[serde(default)]
    hpv: bool,
}

fn field<T>(name: &'static str, value: &str, parse: fn(&str) -> Option<T>) -> Result<T> {
    parse(value).ok_or_else(|| DataError::UnknownValue {
        field: name,
        value: value.to_string(),
    })
}

impl CsvRow {
    fn to_profile(self) -> Result<Profile> {
        let atrophic_gastritis = match self.atrophic_gastritis.as_deref() {
            None | Some("") => AtrophicGastritis::Unknown,
            Some(value) => field("atrophic_gastritis", value, AtrophicGastritis::parse)?,
        };

        Ok(Profile {
            age: self.age,
            sex: field("sex", &self.sex, Sex::parse)?,
            height: self.height,
            weight: self.weight,
            alcohol: field("alcohol", &self.alcohol, Alcohol::parse)?,
            smoking: field("smoking", &self.smoking, Smoking::parse)?,
            cigarettes_per_day: self.cigarettes_per_day,
            exercise: field("exercise", &self.exercise, Exercise::parse)?,
            sleep: field("sleep", &self.sleep, Sleep::parse)?,
            social: field("social", &self.social, Social::parse)?,
            diet: field("diet", &self.diet, Diet::parse)?,
            pylori: field("pylori", &self.pylori, Pylori::parse)?,
            atrophic_gastritis,
            polypharmacy: field("polypharmacy", &self.polypharmacy, Polypharmacy::parse)?,
            family_cancer: self.family_cancer,
            long_lived_parent: self.long_lived_parent,
            allergy: self.allergy,
            cancer_history: self.cancer_history,
            stroke_history: self.stroke_history,
            heart_disease_history: self.heart_disease_history,
            diabetes: self.diabetes,
            hypertension: self.hypertension,
            dyslipidemia: self.dyslipidemia,
            hepatitis: self.hepatitis,
            hpv: self.hpv,
        })
    }
}

/// Load all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<Profile>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DataError::io(path, e))?;
    let profiles = load_profiles_from_reader(file)?;
    log::info!("Loaded {} profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}

/// Load profiles from any reader (e.g., string buffer, stdin)
pub fn load_profiles_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Profile>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    Ok(profiles)
}

/// Load a single profile from a JSON document
pub fn load_profile_json<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DataError::io(path, e))?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "age,sex,height,weight,alcohol,smoking,cigarettes_per_day,exercise,sleep,social,diet,pylori,atrophic_gastritis,polypharmacy,family_cancer,long_lived_parent,allergy,cancer_history,stroke_history,heart_disease_history,diabetes,hypertension,dyslipidemia,hepatitis,hpv";

    #[test]
    fn test_load_profiles_from_reader() {
        let data = format!(
            "{}\n{}\n{}\n",
            HEADER,
            "40,male,170,65,none,never,,no,optimal,moderate,average,unknown,,0,false,false,false,false,false,false,false,false,false,false,false",
            "70,male,168,60,heavy,current,40,no,short,isolated,poor,current,yes,5+,false,false,false,false,true,true,true,false,false,false,false",
        );
        let profiles = load_profiles_from_reader(data.as_bytes()).unwrap();
        assert_eq!(profiles.len(), 2);

        let first = &profiles[0];
        assert_eq!(first.age, 40);
        assert_eq!(first.cigarettes_per_day, None);
        assert_eq!(first.atrophic_gastritis, AtrophicGastritis::Unknown);
        assert_eq!(first.polypharmacy, Polypharmacy::None);

        let second = &profiles[1];
        assert_eq!(second.smoking, Smoking::Current);
        assert_eq!(second.cigarettes_per_day, Some(40));
        assert_eq!(second.atrophic_gastritis, AtrophicGastritis::Yes);
        assert!(second.stroke_history && second.heart_disease_history && second.diabetes);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let data = format!(
            "{}\n{}\n",
            HEADER,
            "40,male,170,65,sometimes,never,,no,optimal,moderate,average,unknown,,0,false,false,false,false,false,false,false,false,false,false,false",
        );
        let err = load_profiles_from_reader(data.as_bytes()).unwrap_err();
        match err {
            DataError::UnknownValue { field, value } => {
                assert_eq!(field, "alcohol");
                assert_eq!(value, "sometimes");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_sample_batch() {
        let profiles = load_profiles(DEFAULT_PROFILES_PATH).expect("Failed to load profiles");
        assert!(!profiles.is_empty());
        assert!(profiles.iter().all(|p| p.height > 0.0 && p.weight > 0.0));
    }
}
