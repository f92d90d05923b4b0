//! AWS Lambda handler for running pricing simulations
//!
//! Accepts a parameter set (plus optional projection settings) as JSON and
//! returns the complete simulation snapshot. Each invocation computes
//! against its own parameter set; nothing is shared between requests.

use chrono::{DateTime, Utc};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use saas_simulator::{
    params::{ParameterField, ParameterSet},
    projection::{ChartMode, ProjectionConfig},
    scenario::check_sweep,
    SimResult, Simulation, SimulationRunner,
};
use serde::{Deserialize, Serialize};

/// Input configuration for the simulation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Parameter fields at the top level; missing fields use defaults
    #[serde(flatten)]
    pub params: ParameterSet,

    /// Revenue or gross profit projections (default: revenue)
    #[serde(default)]
    pub mode: ChartMode,

    /// Months to project after month 0 (default: 12)
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,

    /// Optional one-field sweep
    #[serde(default)]
    pub sensitivity: Option<SensitivityRequest>,
}

#[derive(Debug, Deserialize)]
pub struct SensitivityRequest {
    pub field: ParameterField,
    pub values: Vec<f64>,
}

fn default_horizon_months() -> u32 { 12 }

impl SimulationRequest {
    fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            horizon_months: self.horizon_months,
            mode: self.mode,
            ..Default::default()
        }
    }

    /// Refuse requests whose horizon or sweep would be unbounded work
    fn validate(&self) -> SimResult<()> {
        self.projection_config().validate()?;
        if let Some(sweep) = &self.sensitivity {
            check_sweep(&sweep.values)?;
        }
        Ok(())
    }
}

/// Output from the simulation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    pub generated_at: DateTime<Utc>,
    pub simulation: Simulation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<Vec<SensitivityRow>>,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityRow {
    pub value: f64,
    pub mrr: f64,
    pub ltv: f64,
    pub ltv_cac_ratio: f64,
    pub payback_period_months: f64,
    pub final_customers: f64,
}

impl SensitivityRow {
    fn new(value: f64, sim: &Simulation) -> Self {
        Self {
            value,
            mrr: sim.metrics.mrr,
            ltv: sim.metrics.ltv,
            ltv_cac_ratio: sim.metrics.ltv_cac_ratio,
            payback_period_months: sim.metrics.payback_period_months,
            final_customers: sim.growth.summary().final_customers,
        }
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<SimulationRequest>) -> Result<SimulationResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;
    request.validate()?;

    let runner = SimulationRunner::with_config(request.projection_config());

    let simulation = runner.run(&request.params);

    let sensitivity = request.sensitivity.map(|sweep| {
        runner
            .run_sensitivity(&request.params, sweep.field, &sweep.values)
            .iter()
            .zip(&sweep.values)
            .map(|(sim, &value)| SensitivityRow::new(value, sim))
            .collect()
    });

    log::info!(
        "Simulated MRR {:.2} over {} months",
        simulation.metrics.mrr,
        request.horizon_months
    );

    Ok(SimulationResponse {
        generated_at: Utc::now(),
        simulation,
        sensitivity,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use saas_simulator::SimError;

    fn request(json: &str) -> SimulationRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults_are_accepted() {
        let req = request(r#"{"basePrice": 79}"#);
        assert_eq!(req.params.base_price, 79.0);
        assert_eq!(req.horizon_months, 12);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_oversized_horizon_is_refused() {
        let req = request(r#"{"horizonMonths": 4000000000}"#);
        assert!(matches!(req.validate(), Err(SimError::HorizonTooLong { .. })));
    }

    #[test]
    fn test_oversized_sweep_is_refused() {
        let values: Vec<String> = (0..500).map(|v| v.to_string()).collect();
        let req = request(&format!(
            r#"{{"sensitivity": {{"field": "cac", "values": [{}]}}}}"#,
            values.join(",")
        ));
        assert!(matches!(req.validate(), Err(SimError::SweepTooLong { len: 500, .. })));
    }
}
