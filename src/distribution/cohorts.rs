//! Cohort table for the synthetic customer population

use serde::{Deserialize, Serialize};

use super::hash::hash_in_range;

/// Total number of synthetic customers
pub const POPULATION_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CohortKind {
    TopPerformers,
    HighPerformers,
    LongTail,
    Unprofitable,
}

/// How a cohort's revenue and margin relate to its profit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginRule {
    /// Fixed margin; revenue = profit / margin
    Fixed(f64),
    /// Revenue sampled independently; margin = profit / revenue
    SampledRevenue { revenue_min: f64, revenue_max: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortSpec {
    pub kind: CohortKind,
    pub size: usize,
    pub profit_min: f64,
    pub profit_max: f64,
    pub margin: MarginRule,
    /// First seed of this cohort's range; ranges never overlap
    pub seed_base: u64,
}

/// Offset between the profit seeds and revenue seeds of one cohort
const REVENUE_SEED_OFFSET: u64 = 5_000;

pub static COHORTS: [CohortSpec; 4] = [
    CohortSpec {
        kind: CohortKind::TopPerformers,
        size: 50,
        profit_min: 4.0,
        profit_max: 4.5,
        margin: MarginRule::Fixed(0.90),
        seed_base: 0,
    },
    CohortSpec {
        kind: CohortKind::HighPerformers,
        size: 100,
        profit_min: 4.0,
        profit_max: 4.5,
        margin: MarginRule::Fixed(0.85),
        seed_base: 10_000,
    },
    CohortSpec {
        kind: CohortKind::LongTail,
        size: 750,
        profit_min: 0.86,
        profit_max: 0.96,
        margin: MarginRule::Fixed(0.80),
        seed_base: 20_000,
    },
    CohortSpec {
        kind: CohortKind::Unprofitable,
        size: 100,
        profit_min: -2.5,
        profit_max: -2.0,
        margin: MarginRule::SampledRevenue { revenue_min: 2.0, revenue_max: 2.5 },
        seed_base: 30_000,
    },
];

/// One synthetic customer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityPoint {
    pub cohort: CohortKind,
    pub profit: f64,
    pub revenue: f64,
    pub margin: f64,
}

impl CohortSpec {
    /// Generate the `index`-th customer of this cohort
    pub fn point(&self, index: usize) -> ProfitabilityPoint {
        let seed = self.seed_base + index as u64;
        let profit = hash_in_range(seed, self.profit_min, self.profit_max);

        let (revenue, margin) = match self.margin {
            MarginRule::Fixed(margin) => (profit / margin, margin),
            MarginRule::SampledRevenue { revenue_min, revenue_max } => {
                let revenue = hash_in_range(seed + REVENUE_SEED_OFFSET, revenue_min, revenue_max);
                (revenue, profit / revenue)
            }
        };

        ProfitabilityPoint {
            cohort: self.kind,
            profit,
            revenue,
            margin,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = ProfitabilityPoint> + '_ {
        (0..self.size).map(move |i| self.point(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohort_sizes_sum_to_population() {
        let total: usize = COHORTS.iter().map(|c| c.size).sum();
        assert_eq!(total, POPULATION_SIZE);
    }

    #[test]
    fn test_seed_ranges_do_not_overlap() {
        for pair in COHORTS.windows(2) {
            let end = pair[0].seed_base + REVENUE_SEED_OFFSET + pair[0].size as u64;
            assert!(end <= pair[1].seed_base);
        }
    }

    #[test]
    fn test_points_stay_in_band() {
        for cohort in &COHORTS {
            for p in cohort.points() {
                assert!(p.profit >= cohort.profit_min && p.profit < cohort.profit_max);
                assert!(p.revenue > 0.0);
                match cohort.margin {
                    MarginRule::Fixed(m) => assert_eq!(p.margin, m),
                    MarginRule::SampledRevenue { .. } => assert!(p.margin < 0.0),
                }
            }
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        let first: Vec<_> = COHORTS[2].points().collect();
        let second: Vec<_> = COHORTS[2].points().collect();
        assert_eq!(first, second);
    }
}
