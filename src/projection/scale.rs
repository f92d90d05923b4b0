//! Revenue/profit sampled against customer count

use crate::economics::DerivedMetrics;
use crate::params::ParameterSet;
use super::engine::ProjectionConfig;
use super::series::{ScaleCurve, ScalePoint};

/// Static "what if we had N customers" curve; no time, churn or growth
pub struct ScaleProjector {
    config: ProjectionConfig,
}

impl ScaleProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Sample `scale_steps + 1` evenly spaced customer counts from 0 to
    /// `max(min_scale_customers, 2 * total_customers)`, rounded to whole
    /// customers.
    pub fn project(&self, params: &ParameterSet, metrics: &DerivedMetrics) -> ScaleCurve {
        let steps = self.config.scale_steps.max(1);
        let max_customers = self
            .config
            .min_scale_customers
            .max(params.total_customers as f64 * 2.0);
        let per_customer = metrics.arpu * self.config.mode.factor(params.gross_margin_pct);

        let points = (0..=steps)
            .map(|i| {
                let customers = (max_customers / steps as f64 * i as f64).round() as u32;
                ScalePoint {
                    customers,
                    value: customers as f64 * per_customer,
                }
            })
            .collect();

        ScaleCurve {
            mode: self.config.mode,
            max_customers,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economics::calculate;
    use crate::projection::ChartMode;
    use approx::assert_relative_eq;

    fn curve(params: &ParameterSet, mode: ChartMode) -> ScaleCurve {
        let config = ProjectionConfig { mode, ..Default::default() };
        ScaleProjector::new(config).project(params, &calculate(params))
    }

    #[test]
    fn test_small_base_uses_minimum_axis() {
        let params = ParameterSet { total_customers: 60, ..Default::default() };
        let result = curve(&params, ChartMode::Revenue);

        assert_eq!(result.points.len(), 11);
        assert_eq!(result.max_customers, 200.0);
        let counts: Vec<u32> = result.points.iter().map(|p| p.customers).collect();
        assert_eq!(counts, vec![0, 20, 40, 60, 80, 100, 120, 140, 160, 180, 200]);
    }

    #[test]
    fn test_large_base_doubles_current_customers() {
        let params = ParameterSet { total_customers: 333, ..Default::default() };
        let result = curve(&params, ChartMode::Revenue);

        assert_eq!(result.max_customers, 666.0);
        assert_eq!(result.points[1].customers, 67); // 66.6 rounds up
        assert_eq!(result.points[10].customers, 666);
    }

    #[test]
    fn test_values_scale_with_arpu_and_margin() {
        let params = ParameterSet::default();
        let metrics = calculate(&params);

        let revenue = curve(&params, ChartMode::Revenue);
        let profit = curve(&params, ChartMode::Profit);

        assert_eq!(revenue.points[0].value, 0.0);
        for (r, p) in revenue.points.iter().zip(&profit.points) {
            assert_relative_eq!(r.value, r.customers as f64 * metrics.arpu, epsilon = 1e-9);
            assert_relative_eq!(p.value, r.value * 0.85, epsilon = 1e-9);
        }
    }
}
