//! External static data: life tables and labour-market constants
//!
//! Every analysis takes an `Assumptions` bundle explicitly; swapping editions
//! means building or loading a different bundle.

mod economic;
mod life_table;
pub mod loader;

pub use economic::{EconomicAssumptions, WageStats};
pub use life_table::LifeTable;
pub use loader::LoadedAssumptions;

use crate::error::Result;
use std::path::Path;

/// Container for all analysis assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub life_table: LifeTable,
    pub economics: EconomicAssumptions,
}

impl Assumptions {
    /// In-memory reference edition
    pub fn default_reference() -> Self {
        Self {
            life_table: LifeTable::reference(),
            economics: EconomicAssumptions::default(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Self::from_loaded(LoadedAssumptions::load_from(path)?)
    }

    pub fn from_loaded(loaded: LoadedAssumptions) -> Result<Self> {
        let edition = loaded
            .economics
            .edition
            .unwrap_or_else(|| "custom".to_string());
        let life_table = LifeTable::new(
            loaded.life_table.mortality_rates,
            loaded.life_table.life_expectancy,
            edition,
        )?;

        if life_table.len() <= crate::projection::AGE_CEILING {
            log::debug!(
                "Life table ends at age {}; later years are treated as certain death",
                life_table.max_age()
            );
        }

        Ok(Self {
            life_table,
            economics: loaded.economics.economics,
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_reference()
    }
}
