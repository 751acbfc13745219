//! Longevity Engine CLI
//!
//! Analyzes a single profile and prints a plain-text or JSON report

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use longevity_engine::profile::load_profile_json;
use longevity_engine::{recommend, AnalysisRunner, EconomicValue, SimulationResult};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "longevity")]
#[command(about = "Personalized life expectancy and earnings-at-risk report", long_about = None)]
struct Cli {
    /// Profile JSON file
    #[arg(short, long)]
    profile: PathBuf,

    /// Directory holding life_table.csv and economic_assumptions.csv
    /// (built-in reference edition when omitted)
    #[arg(short, long, value_name = "DIR")]
    assumptions: Option<PathBuf>,

    /// Print the full result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Calendar year used for the projected death year (defaults to this year)
    #[arg(long)]
    year: Option<i32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let profile = load_profile_json(&cli.profile)
        .with_context(|| format!("loading profile {}", cli.profile.display()))?;

    let runner = match &cli.assumptions {
        Some(dir) => AnalysisRunner::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => AnalysisRunner::new(),
    };

    let result = runner.run(&profile);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());
    print_report(&result, profile.age, year);
    Ok(())
}

fn print_report(result: &SimulationResult, age: u8, year: i32) {
    println!("Longevity Report (age {})", age);
    println!("========================\n");

    println!("  Remaining years:     {:.2}", result.life_expectancy);
    println!("  Expected lifespan:   {:.1}", result.lifespan);
    println!("  Median age at death: {:.1}", result.median_age);
    println!(
        "  Versus average:      {:+.2} (official {:.2})",
        result.difference, result.official
    );
    println!(
        "  Projected death year: {}",
        year + result.life_expectancy.round() as i32
    );
    println!(
        "  Hazard ratio:        {:.3} (ideal {:.3})",
        result.hazard_ratio, result.ideal_hazard_ratio
    );
    println!();

    println!("Earnings at risk:");
    print_value("Current loss", &result.economic.current_loss);
    print_value("Potential gain", &result.economic.potential_gain);
    println!(
        "  Working years:       {:.1} (average {:.1})",
        result.economic.work_years_current, result.economic.work_years_average
    );
    println!();

    if result.factors.is_empty() {
        println!("No risk factors apply.");
    } else {
        println!("Factor impacts (years):");
        for factor in &result.factors {
            println!(
                "  {:>+6.1}  {} (HR {:.2})",
                factor.impact, factor.label, factor.hazard_ratio
            );
        }
    }

    println!();
    println!("Recommendation:");
    println!("  {}", recommend(result));

    if let Some(risk) = &result.disease_risk {
        println!();
        println!("Disease risk: {} ({:?})", risk.score, risk.level);
        println!("  {}", risk.advice);
    }
}

fn print_value(label: &str, value: &EconomicValue) {
    println!(
        "  {:<20} {:>14.0} [{:.0} - {:.0}]",
        format!("{}:", label),
        value.value,
        value.min,
        value.max
    );
}
