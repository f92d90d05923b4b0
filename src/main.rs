//! SaaS Simulator CLI
//!
//! Command-line interface for running a single pricing simulation

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use saas_simulator::{
    params::{load_parameters, ParameterField, ParameterSet},
    projection::{ChartMode, ProjectionConfig},
    SimulationRunner,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Revenue,
    Profit,
}

impl From<Mode> for ChartMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Revenue => ChartMode::Revenue,
            Mode::Profit => ChartMode::Profit,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "saas_simulator", version, about = "Project MRR, LTV and growth from SaaS pricing inputs")]
struct Args {
    /// JSON file with parameter overrides (missing fields use defaults)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Override one field, e.g. --set monthlyChurnRate=3.5 (repeatable)
    #[arg(long = "set", value_parser = parse_override)]
    overrides: Vec<(ParameterField, f64)>,

    /// Project revenue or gross profit
    #[arg(long, value_enum, default_value_t = Mode::Revenue)]
    mode: Mode,

    /// Months to project after month 0
    #[arg(long, default_value_t = 12)]
    horizon: u32,

    /// Write the monthly projection to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full snapshot as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn parse_override(raw: &str) -> Result<(ParameterField, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", raw))?;
    let field = ParameterField::from_name(name.trim()).map_err(|e| e.to_string())?;
    let value: f64 = value.trim().parse().map_err(|e| format!("bad value for {}: {}", name, e))?;
    Ok((field, value))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut params = match &args.params {
        Some(path) => load_parameters(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => ParameterSet::default(),
    };
    for (field, value) in &args.overrides {
        field.set(&mut params, *value);
    }

    let runner = SimulationRunner::with_config(ProjectionConfig {
        horizon_months: args.horizon,
        mode: args.mode.into(),
        ..Default::default()
    });
    runner.config().validate()?;
    let sim = runner.run(&params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sim)?);
        return Ok(());
    }

    let m = &sim.metrics;
    println!("SaaS Simulator v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("Revenue Breakdown (per customer / month):");
    println!("  Base Subscription: ${:.2}", sim.breakdown.base);
    println!("  Expansion:        +${:.2}  ({} billable seats per expander)", sim.breakdown.expansion, m.billable_seats_per_expander);
    println!("  Upsell:           +${:.2}", sim.breakdown.upsell);
    println!("  ARPU:              ${:.2}", m.arpu);
    println!();

    println!("Unit Economics:");
    println!("  MRR: ${:.2}   ARR: ${:.2}", m.mrr, m.arr);
    println!("  Churned MRR: -${:.2}/mo (-${:.2}/yr)", m.churned_mrr, m.churned_arr);
    println!("  Net MRR: ${:.2}   Net ARR: ${:.2}", m.net_mrr, m.net_arr);
    println!("  Gross Profit/User: ${:.2}   Total Gross Profit: ${:.2}", m.gross_profit_per_user, m.total_gross_profit);
    println!("  LTV: ${:.0}   LTV:CAC: {:.1}x   Payback: {:.1} months", m.ltv, m.ltv_cac_ratio, m.payback_period_months);
    println!("  Customer Lifetime: {:.1} months", m.customer_lifetime_months);
    println!("  Segments: {} expanded (${:.2}/mo), {} standard (${:.2}/mo)",
        m.expanded_user_count, m.total_revenue_from_expanded,
        m.standard_user_count, m.total_revenue_from_standard);
    println!("  Verdict: {:?} - {}", sim.health.verdict, sim.health.message);
    println!();

    println!("Growth Projection ({:?}, {} months):", sim.growth.mode, args.horizon);
    println!("{:>5} {:>12} {:>10} {:>10} {:>14} {:>12} {:>14}",
        "Month", "Customers", "Churned", "Added", "Gross", "Churned $", "Net");
    println!("{}", "-".repeat(84));
    for p in &sim.growth.points {
        println!("{:>5} {:>12.2} {:>10.2} {:>10.2} {:>14.2} {:>12.2} {:>14.2}",
            p.month, p.customers, p.churned_customers, p.added_customers, p.gross, p.churned, p.net);
    }

    let summary = sim.growth.summary();
    println!("\nSummary:");
    println!("  Customers: {:.1} -> {:.1}", summary.starting_customers, summary.final_customers);
    println!("  Total Gross: ${:.2}", summary.total_gross);
    println!("  Total Churned: ${:.2}", summary.total_churned);
    println!("  Top 20% of customers earn {:.1}% of profit (whale curve peak {:.1}%)",
        sim.distribution.profit_share_of_top(20.0), sim.distribution.peak_profit_pct());

    if let Some(path) = &args.csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        for point in &sim.growth.points {
            writer.serialize(point)?;
        }
        writer.flush()?;
        println!("\nFull projection written to: {}", path.display());
    }

    Ok(())
}
