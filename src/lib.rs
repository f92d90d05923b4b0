//! SaaS Simulator - pricing and unit-economics engine for subscription businesses
//!
//! This library provides:
//! - Unit economics from pricing sliders (ARPU, MRR/ARR, LTV, CAC payback)
//! - 12-month growth projections with compounding growth, churn and net-adds
//! - Revenue/profit scaling curves by customer count
//! - A deterministic synthetic customer-profitability ("whale") curve
//! - Strategy-matrix business records with JSON import/export

pub mod error;
pub mod params;
pub mod economics;
pub mod projection;
pub mod distribution;
pub mod matrix;
pub mod scenario;

// Re-export commonly used types
pub use error::{SimError, SimResult};
pub use params::{ParameterSet, ParameterField, Scenario};
pub use economics::{DerivedMetrics, EconomicsHealth, calculate};
pub use projection::{GrowthProjector, ScaleProjector, ProjectionConfig, ProjectionResult, ChartMode};
pub use distribution::ProfitabilityDistribution;
pub use matrix::{Business, BusinessBoard};
pub use scenario::{SimulationRunner, Simulation, ScenarioResult};
