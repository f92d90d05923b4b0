//! Output structures for growth and scale projections

use serde::{Deserialize, Serialize};

/// Whether projected values are revenue or gross profit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    #[default]
    Revenue,
    Profit,
}

impl ChartMode {
    /// Multiplier applied to revenue: 1 for revenue, gross margin for profit
    pub fn factor(&self, gross_margin_pct: f64) -> f64 {
        match self {
            ChartMode::Revenue => 1.0,
            ChartMode::Profit => gross_margin_pct / 100.0,
        }
    }
}

/// One month of a growth projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Month index (0 = now)
    pub month: u32,

    /// Customers at the start of the month
    pub customers: f64,

    /// Customers lost during the month
    pub churned_customers: f64,

    /// Customers gained (organic growth + net-adds)
    pub added_customers: f64,

    /// Revenue or gross profit from the starting customers
    pub gross: f64,

    /// Revenue or gross profit lost to this month's churn
    pub churned: f64,

    /// `gross - churned`
    pub net: f64,

    /// Churned MRR, always in revenue units
    pub churned_mrr: f64,
}

/// Complete growth projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub mode: ChartMode,

    /// Points for months 0..=horizon
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    pub fn new(mode: ChartMode) -> Self {
        Self {
            mode,
            points: Vec::new(),
        }
    }

    /// Add a projection point
    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_gross: f64 = self.points.iter().map(|p| p.gross).sum();
        let total_churned: f64 = self.points.iter().map(|p| p.churned).sum();
        let peak_gross = self.points.iter().map(|p| p.gross).fold(0.0, f64::max);

        let starting_customers = self.points.first().map(|p| p.customers).unwrap_or(0.0);
        let final_customers = self.points.last().map(|p| p.customers).unwrap_or(0.0);

        ProjectionSummary {
            total_months: self.points.len() as u32,
            starting_customers,
            final_customers,
            total_gross,
            total_churned,
            peak_gross,
        }
    }
}

/// Summary statistics for a growth projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub starting_customers: f64,
    pub final_customers: f64,
    pub total_gross: f64,
    pub total_churned: f64,
    pub peak_gross: f64,
}

/// One sample of the revenue-vs-customers curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePoint {
    pub customers: u32,
    pub value: f64,
}

/// Revenue or profit sampled across customer counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleCurve {
    pub mode: ChartMode,
    pub max_customers: f64,
    pub points: Vec<ScalePoint>,
}
