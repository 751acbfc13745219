//! CSV-based assumption loader
//!
//! Loads the life table and economic constants from CSV files in data/assumptions/

use super::economic::{EconomicAssumptions, WageStats};
use crate::error::{DataError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

pub const LIFE_TABLE_FILE: &str = "life_table.csv";
pub const ECONOMIC_FILE: &str = "economic_assumptions.csv";

/// Life table columns loaded from CSV, indexed by age
#[derive(Debug, Clone)]
pub struct LifeTableColumns {
    /// (female, male) one-year mortality
    pub mortality_rates: Vec<(f64, f64)>,
    /// (female, male) remaining life expectancy
    pub life_expectancy: Vec<(f64, f64)>,
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| DataError::io(path, e))
}

fn parse_number(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| DataError::number(field, value))
}

/// Load life table columns from CSV with header
/// `age,qx_female,qx_male,ex_female,ex_male`.
///
/// Ages must be contiguous from 0; a gap would silently shift every lookup.
pub fn load_life_table_from_reader<R: Read>(reader: R) -> Result<LifeTableColumns> {
    let mut reader = csv::Reader::from_reader(reader);

    let mut mortality_rates = Vec::new();
    let mut life_expectancy = Vec::new();

    for result in reader.records() {
        let record = result?;
        if record.len() < 5 {
            return Err(DataError::InvalidTable(format!(
                "expected 5 columns, found {}",
                record.len()
            )));
        }

        let age: usize = record[0]
            .trim()
            .parse()
            .map_err(|_| DataError::number("age", &record[0]))?;
        if age != mortality_rates.len() {
            return Err(DataError::InvalidTable(format!(
                "expected age {} but found age {}",
                mortality_rates.len(),
                age
            )));
        }

        let qx_female = parse_number("qx_female", &record[1])?;
        let qx_male = parse_number("qx_male", &record[2])?;
        let ex_female = parse_number("ex_female", &record[3])?;
        let ex_male = parse_number("ex_male", &record[4])?;

        mortality_rates.push((qx_female, qx_male));
        life_expectancy.push((ex_female, ex_male));
    }

    Ok(LifeTableColumns {
        mortality_rates,
        life_expectancy,
    })
}

pub fn load_life_table(path: &Path) -> Result<LifeTableColumns> {
    load_life_table_from_reader(open(&path.join(LIFE_TABLE_FILE))?)
}

/// Economic constants loaded from a `key,value` CSV
#[derive(Debug, Clone)]
pub struct LoadedEconomics {
    pub edition: Option<String>,
    pub economics: EconomicAssumptions,
}

/// Load economic constants from a `key,value` CSV.
/// Required keys: retirement_age, annual_hours, wage_mean, wage_lower, wage_upper.
pub fn load_economics_from_reader<R: Read>(reader: R) -> Result<LoadedEconomics> {
    let mut reader = csv::Reader::from_reader(reader);

    let mut values: HashMap<String, String> = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let key = record.get(0).unwrap_or("").trim().to_string();
        let value = record.get(1).unwrap_or("").trim().to_string();
        values.insert(key, value);
    }

    let number = |key: &'static str| -> Result<f64> {
        let value = values.get(key).ok_or(DataError::MissingKey(key))?;
        parse_number(key, value)
    };

    let retirement_age = number("retirement_age")?;
    if !(0.0..=u8::MAX as f64).contains(&retirement_age) || retirement_age.fract() != 0.0 {
        return Err(DataError::number(
            "retirement_age",
            &retirement_age.to_string(),
        ));
    }

    Ok(LoadedEconomics {
        edition: values.get("edition").cloned(),
        economics: EconomicAssumptions {
            retirement_age: retirement_age as u8,
            annual_hours: number("annual_hours")?,
            wages: WageStats {
                mean: number("wage_mean")?,
                lower: number("wage_lower")?,
                upper: number("wage_upper")?,
            },
        },
    })
}

pub fn load_economics(path: &Path) -> Result<LoadedEconomics> {
    load_economics_from_reader(open(&path.join(ECONOMIC_FILE))?)
}

/// All assumption files from one directory
#[derive(Debug, Clone)]
pub struct LoadedAssumptions {
    pub life_table: LifeTableColumns,
    pub economics: LoadedEconomics,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading assumptions from {}", path.display());
        Ok(Self {
            life_table: load_life_table(path)?,
            economics: load_economics(path)?,
        })
    }
}
