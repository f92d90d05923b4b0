//! Whale curve: cumulative profit and margin by customer percentile

use serde::{Deserialize, Serialize};

use super::cohorts::{ProfitabilityPoint, COHORTS};

/// Cumulative position of the i-th most profitable customer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub percentile: f64,
    pub cumulative_profit_pct: f64,
    pub cumulative_margin_pct: f64,
}

/// Synthetic per-customer profitability, sorted most profitable first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityDistribution {
    pub points: Vec<ProfitabilityPoint>,
    pub curve: Vec<CurvePoint>,
    pub total_profit: f64,
    pub total_revenue: f64,
}

impl ProfitabilityDistribution {
    /// Generate the full population from the cohort table and build the
    /// percentile curves. Output is identical on every call.
    pub fn generate() -> Self {
        let mut points: Vec<ProfitabilityPoint> = COHORTS.iter().flat_map(|c| c.points()).collect();
        points.sort_by(|a, b| b.profit.total_cmp(&a.profit));

        let n = points.len() as f64;
        let mut cum_profit = 0.0;
        let mut cum_revenue = 0.0;
        let mut running = Vec::with_capacity(points.len());
        for p in &points {
            cum_profit += p.profit;
            cum_revenue += p.revenue;
            running.push((cum_profit, cum_revenue));
        }

        // The final prefix sum is the total, so the curve ends at exactly 100%
        let (total_profit, total_revenue) = running.last().copied().unwrap_or((0.0, 0.0));

        let curve = running
            .iter()
            .enumerate()
            .map(|(i, &(profit, revenue))| CurvePoint {
                percentile: (i + 1) as f64 / n * 100.0,
                cumulative_profit_pct: if total_profit != 0.0 { profit / total_profit * 100.0 } else { 0.0 },
                cumulative_margin_pct: if revenue > 0.0 { profit / revenue * 100.0 } else { 0.0 },
            })
            .collect();

        log::debug!(
            "Generated profitability distribution: {} customers, total profit {:.2}",
            points.len(),
            total_profit
        );

        Self {
            points,
            curve,
            total_profit,
            total_revenue,
        }
    }

    /// Share of total profit (percent) earned by the top `pct` percent of customers
    pub fn profit_share_of_top(&self, pct: f64) -> f64 {
        if pct <= 0.0 || self.curve.is_empty() {
            return 0.0;
        }
        let n = self.curve.len();
        let count = ((n as f64 * pct / 100.0).ceil() as usize).clamp(1, n);
        self.curve[count - 1].cumulative_profit_pct
    }

    /// Highest point of the whale curve (percent of total profit)
    pub fn peak_profit_pct(&self) -> f64 {
        self.curve
            .iter()
            .map(|c| c.cumulative_profit_pct)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::{CohortKind, POPULATION_SIZE};
    use approx::assert_relative_eq;

    #[test]
    fn test_population_size() {
        let dist = ProfitabilityDistribution::generate();
        assert_eq!(dist.points.len(), POPULATION_SIZE);
        assert_eq!(dist.curve.len(), POPULATION_SIZE);
    }

    #[test]
    fn test_sorted_strictly_descending() {
        let dist = ProfitabilityDistribution::generate();
        for pair in dist.points.windows(2) {
            assert!(pair[0].profit > pair[1].profit);
        }
        assert_eq!(dist.points.last().unwrap().cohort, CohortKind::Unprofitable);
    }

    #[test]
    fn test_curve_ends_at_exactly_one_hundred() {
        let dist = ProfitabilityDistribution::generate();
        let last = dist.curve.last().unwrap();
        assert_eq!(last.cumulative_profit_pct, 100.0);
        assert_eq!(last.percentile, 100.0);
        assert_relative_eq!(dist.curve[0].percentile, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_whale_curve_overshoots_before_unprofitable_tail() {
        let dist = ProfitabilityDistribution::generate();
        // Profitable customers earn more than the total; the tail gives some back
        assert!(dist.peak_profit_pct() > 110.0);
        assert_relative_eq!(dist.profit_share_of_top(90.0), dist.peak_profit_pct(), epsilon = 1e-9);
    }

    #[test]
    fn test_margin_curve_decays() {
        let dist = ProfitabilityDistribution::generate();
        let first = dist.curve.first().unwrap().cumulative_margin_pct;
        let last = dist.curve.last().unwrap().cumulative_margin_pct;
        assert!(first > 80.0);
        assert!(last < first);
        assert_relative_eq!(last, dist.total_profit / dist.total_revenue * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_profit_share_of_top() {
        let dist = ProfitabilityDistribution::generate();
        assert_eq!(dist.profit_share_of_top(0.0), 0.0);
        assert_eq!(dist.profit_share_of_top(100.0), 100.0);
        assert!(dist.profit_share_of_top(15.0) > 50.0);
    }

    #[test]
    fn test_stable_across_runs() {
        assert_eq!(ProfitabilityDistribution::generate(), ProfitabilityDistribution::generate());
    }
}
