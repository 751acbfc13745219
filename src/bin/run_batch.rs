//! Analyze a batch of profiles from a CSV file
//!
//! Writes one summary row per profile for spreadsheet comparison

use anyhow::{Context, Result};
use clap::Parser;
use longevity_engine::profile::{load_profiles, loader::DEFAULT_PROFILES_PATH};
use longevity_engine::{AnalysisRunner, Profile, SimulationResult};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch")]
#[command(about = "Batch life expectancy and earnings-at-risk analysis", long_about = None)]
struct Cli {
    /// Profile CSV, one row per respondent
    #[arg(short, long, default_value = DEFAULT_PROFILES_PATH)]
    input: PathBuf,

    /// Summary CSV to write
    #[arg(short, long, default_value = "batch_output.csv")]
    output: PathBuf,

    /// Assumptions directory (built-in reference edition when omitted)
    #[arg(short, long, value_name = "DIR")]
    assumptions: Option<PathBuf>,
}

/// Flattened result row
#[derive(Debug, Serialize)]
struct BatchRow {
    row: usize,
    age: u8,
    sex: &'static str,
    life_expectancy: f64,
    lifespan: f64,
    median_age: f64,
    official: f64,
    difference: f64,
    hazard_ratio: f64,
    ideal_hazard_ratio: f64,
    current_loss: f64,
    potential_gain: f64,
    work_years_current: f64,
    work_years_average: f64,
    worst_factor: String,
    worst_factor_impact: f64,
}

impl BatchRow {
    fn new(row: usize, profile: &Profile, result: &SimulationResult) -> Self {
        // Factors are sorted most beneficial first; the costliest is last
        let worst = result.factors.last();
        Self {
            row,
            age: profile.age,
            sex: profile.sex.as_str(),
            life_expectancy: result.life_expectancy,
            lifespan: result.lifespan,
            median_age: result.median_age,
            official: result.official,
            difference: result.difference,
            hazard_ratio: result.hazard_ratio,
            ideal_hazard_ratio: result.ideal_hazard_ratio,
            current_loss: result.economic.current_loss.value.round(),
            potential_gain: result.economic.potential_gain.value.round(),
            work_years_current: result.economic.work_years_current,
            work_years_average: result.economic.work_years_average,
            worst_factor: worst.map(|f| f.label.clone()).unwrap_or_default(),
            worst_factor_impact: worst.map_or(0.0, |f| f.impact),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    println!("Loading profiles from {}...", cli.input.display());
    let profiles = load_profiles(&cli.input)
        .with_context(|| format!("loading profiles from {}", cli.input.display()))?;
    println!("Loaded {} profiles in {:?}", profiles.len(), start.elapsed());

    let runner = match &cli.assumptions {
        Some(dir) => AnalysisRunner::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => AnalysisRunner::new(),
    };

    println!("Running analyses...");
    let run_start = Instant::now();
    let results = runner.run_batch(&profiles);
    println!("Analyses complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    for (row, (profile, result)) in profiles.iter().zip(&results).enumerate() {
        writer.serialize(BatchRow::new(row + 1, profile, result))?;
    }
    writer.flush()?;

    println!("Output written to {}", cli.output.display());

    let count = results.len().max(1) as f64;
    let mean_difference = results.iter().map(|r| r.difference).sum::<f64>() / count;
    let total_loss: f64 = results.iter().map(|r| r.economic.current_loss.value).sum();
    println!("\nSummary:");
    println!("  Profiles: {}", results.len());
    println!("  Mean difference vs official: {:+.2} years", mean_difference);
    println!("  Total expected earnings loss: {:.0}", total_loss);
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use longevity_engine::Sex;

    #[test]
    fn test_row_reports_costliest_factor() {
        let profile = Profile::new(40, Sex::Male, 170.0, 65.0);
        let result = AnalysisRunner::new().run(&profile);

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(BatchRow::new(1, &profile, &result)).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let mut lines = output.lines();
        let header = lines.next().unwrap();
        assert!(header.ends_with("worst_factor,worst_factor_impact"), "{}", header);
        assert!(lines.next().unwrap().contains(",insufficient exercise,-"));
    }
}
