//! Growth projection engine: customers, revenue and churn over the horizon

use serde::{Deserialize, Serialize};

use crate::economics::DerivedMetrics;
use crate::error::{SimError, SimResult};
use crate::params::ParameterSet;
use super::state::GrowthState;
use super::series::{ChartMode, ProjectionPoint, ProjectionResult};

/// Longest projection a run will accept (ten years)
pub const MAX_HORIZON_MONTHS: u32 = 120;

/// Configuration for projection runs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionConfig {
    /// Number of months to project after month 0
    pub horizon_months: u32,

    /// Revenue or gross profit output
    pub mode: ChartMode,

    /// Intervals in the scale curve (points = steps + 1)
    pub scale_steps: u32,

    /// Lower bound on the scale curve's customer axis
    pub min_scale_customers: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: 12,
            mode: ChartMode::Revenue,
            scale_steps: 10,
            min_scale_customers: 200.0,
        }
    }
}

impl ProjectionConfig {
    /// Reject horizons past `MAX_HORIZON_MONTHS`
    pub fn validate(&self) -> SimResult<()> {
        if self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(SimError::HorizonTooLong {
                months: self.horizon_months,
                max: MAX_HORIZON_MONTHS,
            });
        }
        Ok(())
    }
}

/// Month-by-month growth projector
pub struct GrowthProjector {
    config: ProjectionConfig,
}

impl GrowthProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project the customer base and its revenue/profit.
    ///
    /// Returns `horizon_months + 1` points. Each point is recorded from the
    /// start-of-month customer count before churn and growth are applied, so
    /// month 0 always reflects the unmodified `total_customers`.
    pub fn project(&self, params: &ParameterSet, metrics: &DerivedMetrics) -> ProjectionResult {
        let mut result = ProjectionResult::new(self.config.mode);
        let mut state = GrowthState::from_params(params);
        let factor = self.config.mode.factor(params.gross_margin_pct);

        for month in 0..=self.config.horizon_months {
            result.add_point(self.calculate_month(&state, metrics.arpu, factor));

            if month < self.config.horizon_months {
                state.advance_month();
            }
        }

        log::debug!(
            "Projected {} months: {} -> {:.2} customers",
            self.config.horizon_months,
            params.total_customers,
            state.customers
        );

        result
    }

    /// Record one month from the start-of-month state
    fn calculate_month(&self, state: &GrowthState, arpu: f64, factor: f64) -> ProjectionPoint {
        let churned_customers = state.churned_customers();
        let gross = state.customers * arpu * factor;
        let churned = churned_customers * arpu * factor;

        ProjectionPoint {
            month: state.month,
            customers: state.customers,
            churned_customers,
            added_customers: state.organic_growth() + state.net_adds,
            gross,
            churned,
            net: gross - churned,
            churned_mrr: churned_customers * arpu,
        }
    }
}
