//! Price an inforce block under every assumption scenario
//!
//! Usage: cargo run --bin price_block -- --policies data/policies.csv \
//!            --assumptions data/assumption_sets.csv --output priced_block.csv

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use life_premium::assumptions::{loader::DEFAULT_ASSUMPTIONS_PATH, load_assumption_sets};
use life_premium::policy::{load_policies, loader::DEFAULT_POLICIES_PATH};
use life_premium::pricing::{format_fixed, REPORT_DECIMALS};
use life_premium::scenario::BASE_SCENARIO;
use life_premium::{price_grid, BlockSummary, PricedPolicy, ScenarioRunner};
use log::info;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "price_block", about = "Price a block of policies under assumption scenarios")]
struct Args {
    /// Inforce file (PolicyID,PolicyType,BasePremium,CoverageAmount,TermYears)
    #[arg(long, default_value = DEFAULT_POLICIES_PATH)]
    policies: PathBuf,

    /// Scenario file (Scenario,MortalityRate,ExpenseLoad,InterestRate)
    #[arg(long, default_value = DEFAULT_ASSUMPTIONS_PATH)]
    assumptions: PathBuf,

    /// Where to write the priced rows
    #[arg(long, default_value = "priced_block.csv")]
    output: PathBuf,

    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Scenario whose per-policy figures are listed on the console
    #[arg(long, default_value = BASE_SCENARIO)]
    base_scenario: String,
}

/// One output row; the csv writer needs a flat record
#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "PolicyID")]
    policy_id: u32,
    #[serde(rename = "Scenario")]
    scenario: &'a str,
    #[serde(rename = "PolicyType")]
    policy_type: &'static str,
    #[serde(rename = "BasePremium")]
    base_premium: f64,
    #[serde(rename = "CoverageAmount")]
    coverage_amount: f64,
    #[serde(rename = "TermYears")]
    term_years: u32,
    #[serde(rename = "ExpectedClaim")]
    expected_claim: f64,
    #[serde(rename = "GrossPremium")]
    gross_premium: f64,
    #[serde(rename = "AnnuityFactor")]
    annuity_factor: f64,
    #[serde(rename = "PVBenefits")]
    pv_benefits: f64,
    #[serde(rename = "NetPremiumPerYear")]
    net_premium_per_year: f64,
}

impl<'a> From<&'a PricedPolicy> for CsvRow<'a> {
    fn from(p: &'a PricedPolicy) -> Self {
        Self {
            policy_id: p.policy_id,
            scenario: &p.scenario,
            policy_type: p.quote.policy_type.as_str(),
            base_premium: p.base_premium,
            coverage_amount: p.coverage_amount,
            term_years: p.term_years,
            expected_claim: p.quote.expected_claim,
            gross_premium: p.quote.gross_premium,
            annuity_factor: p.quote.annuity_factor,
            pv_benefits: p.quote.present_value_of_benefits,
            net_premium_per_year: p.quote.net_premium_per_year,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    priced_at: DateTime<Utc>,
    summaries: Vec<(&'a str, BlockSummary)>,
    rows: &'a [PricedPolicy],
}

/// Policies listed individually under the base scenario
const BASE_ROWS_SHOWN: usize = 10;

fn money(value: f64) -> String {
    format_fixed(value, REPORT_DECIMALS)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading policies from {}...", args.policies.display());
    let policies = load_policies(&args.policies)
        .with_context(|| format!("failed to load policies from {}", args.policies.display()))?;
    let scenarios = load_assumption_sets(&args.assumptions)
        .with_context(|| format!("failed to load assumptions from {}", args.assumptions.display()))?;
    println!(
        "Loaded {} policies and {} scenarios in {:?}",
        policies.len(),
        scenarios.len(),
        start.elapsed()
    );

    let Some(base) = scenarios.iter().find(|s| s.name == args.base_scenario) else {
        bail!(
            "base scenario '{}' not found in {}",
            args.base_scenario,
            args.assumptions.display()
        );
    };

    let price_start = Instant::now();
    let groups = price_grid(&policies, &scenarios);
    let priced: Vec<PricedPolicy> = groups.iter().flatten().cloned().collect();
    info!("priced {} rows in {:?}", priced.len(), price_start.elapsed());

    // One summary per scenario group; names are unique after loading
    let summaries: Vec<(&str, BlockSummary)> = scenarios
        .iter()
        .zip(&groups)
        .map(|(s, rows)| (s.name.as_str(), BlockSummary::from_priced(rows)))
        .collect();

    match args.format {
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_path(&args.output)
                .with_context(|| format!("failed to create {}", args.output.display()))?;
            for row in &priced {
                writer.serialize(CsvRow::from(row))?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            let file = File::create(&args.output)
                .with_context(|| format!("failed to create {}", args.output.display()))?;
            let mut out = BufWriter::new(file);
            let report = JsonReport {
                priced_at: Utc::now(),
                summaries: summaries.clone(),
                rows: &priced,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            out.flush()?;
        }
    }
    println!("Results written to: {}", args.output.display());

    let runner = ScenarioRunner::new(base.assumptions);
    let a = runner.assumptions();
    println!(
        "\nBase scenario '{}' (q={}, load={}, i={}):",
        base.name,
        a.mortality_rate(),
        a.expense_load(),
        a.interest_rate()
    );
    println!("{:>8} {:>14} {:>14} {:>16} {:>14}", "Policy", "ExpClaim", "GrossPrem", "PV Benefits", "NetPrem/Yr");
    let base_rows = runner.run_batch(&policies);
    for row in base_rows.iter().take(BASE_ROWS_SHOWN) {
        println!(
            "{:>8} {:>14} {:>14} {:>16} {:>14}",
            row.policy_id,
            money(row.quote.expected_claim),
            money(row.quote.gross_premium),
            money(row.quote.present_value_of_benefits),
            money(row.quote.net_premium_per_year),
        );
    }
    if base_rows.len() > BASE_ROWS_SHOWN {
        println!("... ({} more policies)", base_rows.len() - BASE_ROWS_SHOWN);
    }

    println!("\nSummary by scenario:");
    println!(
        "{:<16} {:>6} {:>16} {:>14} {:>14} {:>16} {:>14}",
        "Scenario", "Count", "Coverage", "ExpClaim", "GrossPrem", "PV Benefits", "NetPrem/Yr"
    );
    println!("{}", "-".repeat(102));
    for (name, s) in &summaries {
        println!(
            "{:<16} {:>6} {:>16} {:>14} {:>14} {:>16} {:>14}",
            name,
            s.count,
            money(s.total_coverage),
            money(s.total_expected_claim),
            money(s.total_gross_premium),
            money(s.total_pv_benefits),
            money(s.total_net_premium),
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
