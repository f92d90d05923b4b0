//! Unit economics: ARPU, MRR/ARR, LTV, CAC payback and churn impact

mod calculator;
mod health;

pub use calculator::{DerivedMetrics, RevenueBreakdown, calculate};
pub use health::{EconomicsHealth, Verdict, TARGET_LTV_CAC, MAX_PAYBACK_MONTHS};
