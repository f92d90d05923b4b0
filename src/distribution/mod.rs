//! Synthetic customer-profitability distribution ("whale curve")

mod hash;
mod cohorts;
mod curve;

pub use hash::{unit_hash, hash_in_range};
pub use cohorts::{CohortKind, CohortSpec, MarginRule, ProfitabilityPoint, COHORTS, POPULATION_SIZE};
pub use curve::{CurvePoint, ProfitabilityDistribution};
