//! Simulation runner: full snapshots, batches and sensitivity sweeps
//!
//! Every run recomputes all outputs from a clamped copy of its parameter
//! set. Nothing is cached or shared between runs.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::distribution::ProfitabilityDistribution;
use crate::economics::{DerivedMetrics, EconomicsHealth, RevenueBreakdown};
use crate::error::{SimError, SimResult};
use crate::params::{ParameterField, ParameterSet, Scenario};
use crate::projection::{GrowthProjector, ProjectionConfig, ProjectionResult, ScaleCurve, ScaleProjector};

/// Every output of the simulator for one parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub params: ParameterSet,
    pub metrics: DerivedMetrics,
    pub breakdown: RevenueBreakdown,
    pub health: EconomicsHealth,
    pub growth: ProjectionResult,
    pub scale: ScaleCurve,
    pub distribution: ProfitabilityDistribution,
}

/// A named simulation from a scenario batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub simulation: Simulation,
}

/// Runner holding the projection configuration shared by its runs
///
/// # Example
/// ```ignore
/// let runner = SimulationRunner::new();
///
/// for churn in [2.0, 5.0, 8.0] {
///     let params = ParameterSet { monthly_churn_rate: churn, ..Default::default() };
///     let snapshot = runner.run(&params);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationRunner {
    config: ProjectionConfig,
}

/// Most values a single sensitivity sweep will accept
pub const MAX_SWEEP_VALUES: usize = 100;

/// Reject sweeps longer than `MAX_SWEEP_VALUES`
pub fn check_sweep(values: &[f64]) -> SimResult<()> {
    if values.len() > MAX_SWEEP_VALUES {
        return Err(SimError::SweepTooLong { len: values.len(), max: MAX_SWEEP_VALUES });
    }
    Ok(())
}

impl SimulationRunner {
    /// Create runner with the default 12-month revenue configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a custom projection configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ProjectionConfig {
        &mut self.config
    }

    /// Run every calculator and projector for one parameter set
    pub fn run(&self, params: &ParameterSet) -> Simulation {
        let params = params.clamp_to_domain();
        let metrics = DerivedMetrics::from_params(&params);

        let growth = GrowthProjector::new(self.config.clone()).project(&params, &metrics);
        let scale = ScaleProjector::new(self.config.clone()).project(&params, &metrics);

        Simulation {
            breakdown: metrics.revenue_breakdown(&params),
            health: EconomicsHealth::assess(&metrics),
            distribution: ProfitabilityDistribution::generate(),
            params,
            metrics,
            growth,
            scale,
        }
    }

    /// Run independent scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
        log::info!("Running {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|scenario| ScenarioResult {
                name: scenario.name.clone(),
                simulation: self.run(&scenario.params),
            })
            .collect()
    }

    /// Sweep one field over `values`, one snapshot per value
    pub fn run_sensitivity(&self, params: &ParameterSet, field: ParameterField, values: &[f64]) -> Vec<Simulation> {
        values
            .par_iter()
            .map(|&value| self.run(&params.with_field(field, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ChartMode;
    use approx::assert_relative_eq;

    #[test]
    fn test_run_produces_consistent_snapshot() {
        let runner = SimulationRunner::new();
        let sim = runner.run(&ParameterSet::default());

        assert_eq!(sim.growth.points.len(), 13);
        assert_eq!(sim.scale.points.len(), 11);
        assert_eq!(sim.distribution.points.len(), 1000);
        assert_relative_eq!(sim.growth.points[0].gross, sim.metrics.mrr, epsilon = 1e-9);
        assert_eq!(sim.breakdown.total, sim.metrics.arpu);
    }

    #[test]
    fn test_run_clamps_inputs() {
        let runner = SimulationRunner::new();
        let params = ParameterSet { monthly_churn_rate: 250.0, ..Default::default() };
        let sim = runner.run(&params);

        assert_eq!(sim.params.monthly_churn_rate, 100.0);
        assert!(sim.growth.points.iter().all(|p| p.customers >= 0.0));
    }

    #[test]
    fn test_profit_mode_config() {
        let runner = SimulationRunner::with_config(ProjectionConfig {
            mode: ChartMode::Profit,
            ..Default::default()
        });
        let sim = runner.run(&ParameterSet::default());
        assert_relative_eq!(sim.growth.points[0].gross, sim.metrics.total_gross_profit, epsilon = 1e-9);
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = SimulationRunner::new();
        let scenarios: Vec<Scenario> = [1.0, 5.0, 10.0]
            .iter()
            .map(|&churn| Scenario {
                name: format!("churn-{}", churn),
                params: ParameterSet { monthly_churn_rate: churn, ..Default::default() },
            })
            .collect();

        let results = runner.run_batch(&scenarios);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].name, "churn-1");

        // Lower churn should result in higher LTV
        assert!(results[0].simulation.metrics.ltv > results[2].simulation.metrics.ltv);
    }

    #[test]
    fn test_sensitivity_sweep() {
        let runner = SimulationRunner::new();
        let sims = runner.run_sensitivity(&ParameterSet::default(), ParameterField::GrossMarginPct, &[60.0, 70.0, 80.0]);

        assert_eq!(sims.len(), 3);
        assert_eq!(sims[1].params.gross_margin_pct, 70.0);
        assert!(sims[2].metrics.total_gross_profit > sims[0].metrics.total_gross_profit);
    }

    #[test]
    fn test_sweep_limit() {
        assert!(check_sweep(&[1.0; MAX_SWEEP_VALUES]).is_ok());

        let err = check_sweep(&vec![1.0; MAX_SWEEP_VALUES + 1]).unwrap_err();
        assert!(matches!(err, SimError::SweepTooLong { len: 101, max: 100 }));
    }

    #[test]
    fn test_snapshot_serializes() {
        let sim = SimulationRunner::new().run(&ParameterSet::default());
        let json = serde_json::to_value(&sim).unwrap();
        assert!(json["metrics"]["ltvCacRatio"].is_number());
        assert_eq!(json["growth"]["mode"], "revenue");
    }
}
