//! Period life tables by sex
//!
//! Each age row carries two published columns:
//! - `qx`: probability of dying within one year at exact age x
//! - `ex`: remaining life expectancy at exact age x
//!
//! `qx` drives the survival simulation; `ex` is the official figure the
//! simulation is calibrated against.

use crate::error::{DataError, Result};
use crate::profile::Sex;

/// Life table with one-year mortality and remaining life expectancy by age
#[derive(Debug, Clone)]
pub struct LifeTable {
    /// One-year mortality probability by age (index = age)
    /// Stored as (female_rate, male_rate)
    mortality_rates: Vec<(f64, f64)>,

    /// Remaining life expectancy in years by age (index = age)
    /// Stored as (female, male)
    life_expectancy: Vec<(f64, f64)>,

    /// Edition label, e.g. the publication year of the source table
    edition: String,
}

fn by_sex((female, male): (f64, f64), sex: Sex) -> f64 {
    match sex {
        Sex::Female => female,
        Sex::Male => male,
    }
}

impl LifeTable {
    /// Reference edition shipped with the crate (ages 0-110)
    pub fn reference() -> Self {
        Self {
            mortality_rates: Self::reference_mortality_rates(),
            life_expectancy: Self::reference_life_expectancy(),
            edition: "reference-2023".to_string(),
        }
    }

    /// Build a table from age-indexed columns. Both columns must cover the
    /// same ages and mortality rates must be probabilities.
    pub fn new(
        mortality_rates: Vec<(f64, f64)>,
        life_expectancy: Vec<(f64, f64)>,
        edition: impl Into<String>,
    ) -> Result<Self> {
        if mortality_rates.is_empty() {
            return Err(DataError::InvalidTable("life table has no rows".into()));
        }
        if mortality_rates.len() != life_expectancy.len() {
            return Err(DataError::InvalidTable(format!(
                "qx covers {} ages but ex covers {}",
                mortality_rates.len(),
                life_expectancy.len()
            )));
        }
        if let Some(age) = mortality_rates
            .iter()
            .position(|&(f, m)| !(0.0..=1.0).contains(&f) || !(0.0..=1.0).contains(&m))
        {
            return Err(DataError::InvalidTable(format!(
                "qx at age {} is not a probability",
                age
            )));
        }

        Ok(Self {
            mortality_rates,
            life_expectancy,
            edition: edition.into(),
        })
    }

    /// Number of ages covered (index = age)
    pub fn len(&self) -> usize {
        self.mortality_rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mortality_rates.is_empty()
    }

    /// Oldest age with a row in the table
    pub fn max_age(&self) -> usize {
        self.len().saturating_sub(1)
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }

    /// One-year mortality probability, or `None` past the end of the table
    pub fn mortality_rate(&self, age: usize, sex: Sex) -> Option<f64> {
        self.mortality_rates.get(age).map(|&pair| by_sex(pair, sex))
    }

    /// Official remaining life expectancy at `age`.
    /// Ages past the end of the table contribute zero years.
    pub fn official_expectancy(&self, age: u8, sex: Sex) -> f64 {
        self.life_expectancy
            .get(age as usize)
            .map(|&pair| by_sex(pair, sex))
            .unwrap_or(0.0)
    }

    /// Graduated one-year mortality probabilities
    fn reference_mortality_rates() -> Vec<(f64, f64)> {
        vec![
            // Age 0-9
            (0.0018, 0.00216), (0.00037, 0.00055), (0.00029, 0.00046),
            (0.00026, 0.00043), (0.00025, 0.00042), (0.00021, 0.00038),
            (0.00021, 0.00038), (0.00021, 0.00038), (0.00021, 0.00038),
            (0.00021, 0.00039),
            // Age 10-19
            (0.00021, 0.00039), (0.00022, 0.0004), (0.00022, 0.0004),
            (0.00022, 0.00041), (0.00022, 0.00041), (0.00022, 0.00042),
            (0.00023, 0.00043), (0.00023, 0.00043), (0.00023, 0.00044),
            (0.00024, 0.00045),
            // Age 20-29
            (0.00024, 0.00046), (0.00025, 0.00048), (0.00025, 0.00049),
            (0.00026, 0.0005), (0.00026, 0.00052), (0.00027, 0.00054),
            (0.00028, 0.00056), (0.00029, 0.00058), (0.0003, 0.0006),
            (0.00031, 0.00063),
            // Age 30-39
            (0.00032, 0.00066), (0.00033, 0.00069), (0.00035, 0.00073),
            (0.00037, 0.00077), (0.00039, 0.00081), (0.00041, 0.00086),
            (0.00043, 0.00092), (0.00046, 0.00098), (0.00049, 0.00104),
            (0.00052, 0.00111),
            // Age 40-49
            (0.00056, 0.0012), (0.0006, 0.00128), (0.00064, 0.00138),
            (0.00069, 0.00149), (0.00075, 0.00161), (0.00081, 0.00174),
            (0.00088, 0.00189), (0.00096, 0.00205), (0.00104, 0.00223),
            (0.00114, 0.00243),
            // Age 50-59
            (0.00125, 0.00265), (0.00137, 0.00289), (0.0015, 0.00315),
            (0.00165, 0.00345), (0.00181, 0.00377), (0.00199, 0.00413),
            (0.0022, 0.00453), (0.00243, 0.00497), (0.00268, 0.00545),
            (0.00296, 0.00599),
            // Age 60-69
            (0.00328, 0.00658), (0.00363, 0.00723), (0.00402, 0.00795),
            (0.00445, 0.00875), (0.00494, 0.00963), (0.00547, 0.0106),
            (0.00607, 0.01167), (0.00674, 0.01285), (0.00749, 0.01416),
            (0.00831, 0.0156),
            // Age 70-79
            (0.00923, 0.01719), (0.01026, 0.01894), (0.0114, 0.02088),
            (0.01267, 0.02301), (0.01408, 0.02537), (0.01565, 0.02796),
            (0.0174, 0.03082), (0.01934, 0.03397), (0.0215, 0.03744),
            (0.0239, 0.04126),
            // Age 80-89
            (0.02657, 0.04547), (0.02953, 0.05009), (0.03282, 0.05518),
            (0.03648, 0.06076), (0.04053, 0.0669), (0.04502, 0.07364),
            (0.05001, 0.08103), (0.05553, 0.08912), (0.06164, 0.09799),
            (0.0684, 0.10769),
            // Age 90-99
            (0.07588, 0.11828), (0.08413, 0.12985), (0.09325, 0.14245),
            (0.10329, 0.15617), (0.11435, 0.17108), (0.12652, 0.18724),
            (0.13987, 0.20474), (0.1545, 0.22365), (0.17051, 0.24402),
            (0.18799, 0.26591),
            // Age 100-109
            (0.20703, 0.28936), (0.22772, 0.31441), (0.25013, 0.34107),
            (0.27433, 0.36933), (0.30037, 0.39916), (0.32829, 0.43048),
            (0.35807, 0.4632), (0.38971, 0.49718), (0.42311, 0.53224),
            (0.45818, 0.56815),
            // Age 110-110
            (0.49475, 0.60463),
        ]
    }

    /// Remaining life expectancy consistent with the mortality column
    fn reference_life_expectancy() -> Vec<(f64, f64)> {
        vec![
            // Age 0-9
            (87.14, 81.09), (86.3, 80.26), (85.33, 79.31),
            (84.35, 78.34), (83.37, 77.38), (82.39, 76.41),
            (81.41, 75.44), (80.43, 74.47), (79.45, 73.5),
            (78.46, 72.52),
            // Age 10-19
            (77.48, 71.55), (76.49, 70.58), (75.51, 69.61),
            (74.53, 68.63), (73.54, 67.66), (72.56, 66.69),
            (71.58, 65.72), (70.59, 64.75), (69.61, 63.77),
            (68.62, 62.8),
            // Age 20-29
            (67.64, 61.83), (66.66, 60.86), (65.67, 59.89),
            (64.69, 58.92), (63.71, 57.95), (62.72, 56.98),
            (61.74, 56.01), (60.76, 55.04), (59.77, 54.07),
            (58.79, 53.1),
            // Age 30-39
            (57.81, 52.13), (56.83, 51.17), (55.85, 50.2),
            (54.87, 49.24), (53.89, 48.28), (52.91, 47.32),
            (51.93, 46.36), (50.95, 45.4), (49.97, 44.44),
            (49.0, 43.49),
            // Age 40-49
            (48.02, 42.54), (47.05, 41.59), (46.08, 40.64),
            (45.11, 39.7), (44.14, 38.75), (43.17, 37.82),
            (42.2, 36.88), (41.24, 35.95), (40.28, 35.02),
            (39.32, 34.1),
            // Age 50-59
            (38.37, 33.18), (37.41, 32.27), (36.46, 31.36),
            (35.52, 30.46), (34.57, 29.56), (33.64, 28.67),
            (32.7, 27.79), (31.77, 26.91), (30.85, 26.04),
            (29.93, 25.18),
            // Age 60-69
            (29.02, 24.33), (28.11, 23.49), (27.21, 22.66),
            (26.32, 21.84), (25.44, 21.02), (24.56, 20.22),
            (23.69, 19.44), (22.83, 18.66), (21.99, 17.9),
            (21.15, 17.15),
            // Age 70-79
            (20.32, 16.41), (19.51, 15.69), (18.7, 14.98),
            (17.91, 14.29), (17.14, 13.61), (16.37, 12.96),
            (15.63, 12.31), (14.89, 11.69), (14.18, 11.08),
            (13.48, 10.49),
            // Age 80-89
            (12.8, 9.92), (12.13, 9.37), (11.49, 8.84),
            (10.86, 8.33), (10.25, 7.83), (9.66, 7.36),
            (9.09, 6.91), (8.55, 6.47), (8.02, 6.06),
            (7.51, 5.66),
            // Age 90-99
            (7.03, 5.28), (6.56, 4.92), (6.12, 4.58),
            (5.7, 4.26), (5.3, 3.96), (4.92, 3.67),
            (4.56, 3.4), (4.22, 3.15), (3.9, 2.91),
            (3.6, 2.69),
            // Age 100-109
            (3.31, 2.48), (3.05, 2.29), (2.8, 2.11),
            (2.57, 1.94), (2.35, 1.79), (2.14, 1.64),
            (1.94, 1.51), (1.75, 1.38), (1.55, 1.25),
            (1.32, 1.1),
            // Age 110-110
            (1.01, 0.9),
        ]
    }
}
