//! Run every scenario in a CSV file and write one summary row per scenario
//!
//! Usage: run_scenarios scenarios.csv [--output scenario_summary.csv]

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use saas_simulator::{
    params::load_scenarios,
    projection::ProjectionConfig,
    ScenarioResult, SimulationRunner,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Batch-run SaaS pricing scenarios")]
struct Args {
    /// Scenario CSV (Scenario column + one column per parameter)
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "scenario_summary.csv")]
    output: PathBuf,

    /// Months to project after month 0
    #[arg(long, default_value_t = 12)]
    horizon: u32,
}

/// One output row per scenario
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SummaryRow {
    scenario: String,
    arpu: f64,
    mrr: f64,
    arr: f64,
    net_mrr: f64,
    ltv: f64,
    ltv_cac: f64,
    payback_months: f64,
    final_customers: f64,
    final_mrr: f64,
    total_churned_mrr: f64,
    verdict: String,
}

impl From<&ScenarioResult> for SummaryRow {
    fn from(result: &ScenarioResult) -> Self {
        let sim = &result.simulation;
        let summary = sim.growth.summary();
        let final_mrr = sim.growth.points.last().map(|p| p.gross).unwrap_or(0.0);
        let total_churned_mrr = sim.growth.points.iter().map(|p| p.churned_mrr).sum();

        Self {
            scenario: result.name.clone(),
            arpu: sim.metrics.arpu,
            mrr: sim.metrics.mrr,
            arr: sim.metrics.arr,
            net_mrr: sim.metrics.net_mrr,
            ltv: sim.metrics.ltv,
            ltv_cac: sim.metrics.ltv_cac_ratio,
            payback_months: sim.metrics.payback_period_months,
            final_customers: summary.final_customers,
            final_mrr,
            total_churned_mrr,
            verdict: format!("{:?}", sim.health.verdict),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    log::info!("Batch started at {}", Utc::now().to_rfc3339());

    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("Failed to load scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = SimulationRunner::with_config(ProjectionConfig {
        horizon_months: args.horizon,
        ..Default::default()
    });
    runner.config().validate()?;

    let proj_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Simulations complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for result in &results {
        writer.serialize(SummaryRow::from(result))?;
    }
    writer.flush()?;
    println!("Output written to {}", args.output.display());

    println!("\nScenario Summary:");
    for result in &results {
        let m = &result.simulation.metrics;
        println!("  {:<20} MRR=${:>12.2}  LTV:CAC={:>5.1}x  Payback={:>5.1}mo  {:?}",
            result.name, m.mrr, m.ltv_cac_ratio, m.payback_period_months, result.simulation.health.verdict);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
