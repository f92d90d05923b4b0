//! Customer-base state tracked month by month during a growth projection

use crate::params::ParameterSet;

/// Convert a yearly compounding growth rate (percent) to the equivalent
/// monthly rate as a fraction.
///
/// The base is floored at 0 so a -100% year maps to a -100% month.
pub fn monthly_growth_rate(yearly_growth_pct: f64) -> f64 {
    (1.0 + yearly_growth_pct / 100.0).max(0.0).powf(1.0 / 12.0) - 1.0
}

/// State of the customer base at the start of a month
#[derive(Debug, Clone)]
pub struct GrowthState {
    /// Month index (0 = now)
    pub month: u32,

    /// Customers at the start of the month (fractional while projecting)
    pub customers: f64,

    /// Monthly compounding growth rate as a fraction
    pub monthly_growth_rate: f64,

    /// Monthly churn as a fraction
    pub churn: f64,

    /// Linear net-adds per month
    pub net_adds: f64,
}

impl GrowthState {
    /// Initialize state from the current customer base
    pub fn from_params(params: &ParameterSet) -> Self {
        Self {
            month: 0,
            customers: params.total_customers as f64,
            monthly_growth_rate: monthly_growth_rate(params.yearly_growth_rate),
            churn: params.churn(),
            net_adds: params.monthly_new_customers,
        }
    }

    /// Customers lost during this month
    pub fn churned_customers(&self) -> f64 {
        self.customers * self.churn
    }

    /// Customers gained through compounding growth this month
    pub fn organic_growth(&self) -> f64 {
        self.customers * self.monthly_growth_rate
    }

    /// Advance to next month.
    ///
    /// Churn is taken off the pre-update count, then organic growth and
    /// net-adds are added; the result is floored at 0.
    pub fn advance_month(&mut self) {
        let churned = self.churned_customers();
        let organic = self.organic_growth();

        self.customers = (self.customers - churned + organic + self.net_adds).max(0.0);
        self.month += 1;
    }
}
