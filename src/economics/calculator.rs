//! Single-point unit economics derived from a parameter set

use serde::{Deserialize, Serialize};

use crate::params::ParameterSet;

/// Derived metrics for one parameter set
///
/// Always recomputed in full from a `ParameterSet`; nothing here is updated
/// incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    // Per-user revenue build-up
    pub billable_seats_per_expander: f64,
    pub weighted_seat_revenue: f64,
    pub avg_upsell_revenue: f64,
    pub arpu: f64,

    // Segment split
    pub expanded_user_revenue: f64,
    pub expansion_cost_only: f64,
    pub expanded_user_count: u32,
    pub standard_user_count: u32,
    pub total_revenue_from_expanded: f64,
    pub total_revenue_from_standard: f64,

    // Recurring revenue and profit
    pub mrr: f64,
    pub arr: f64,
    pub gross_profit_per_user: f64,
    pub total_gross_profit: f64,

    // Churn impact
    pub churned_mrr: f64,
    pub churned_arr: f64,
    pub churned_gross_profit: f64,
    pub net_mrr: f64,
    pub net_arr: f64,
    pub net_gross_profit: f64,

    // Lifetime economics
    pub ltv: f64,
    pub payback_period_months: f64,
    pub ltv_cac_ratio: f64,
    pub customer_lifetime_months: f64,
}

impl DerivedMetrics {
    /// Compute all metrics for `params`.
    ///
    /// Performs no validation: out-of-range inputs must be clamped by the
    /// caller. Zero churn, zero CAC and zero per-user profit saturate the
    /// affected ratios to 0 instead of dividing by zero.
    pub fn from_params(params: &ParameterSet) -> Self {
        let customers = params.total_customers as f64;
        let margin = params.margin();
        let churn = params.churn();

        // Seats beyond the included allotment; never negative
        let billable_seats_per_expander =
            (params.avg_seats_per_expanded_account - params.included_seats as f64).max(0.0);
        let weighted_seat_revenue =
            billable_seats_per_expander * params.price_per_seat * (params.expansion_rate / 100.0);
        let avg_upsell_revenue = params.upsell_price * (params.upsell_take_rate / 100.0);
        let arpu = params.base_price + weighted_seat_revenue + avg_upsell_revenue;

        let expansion_cost_only = billable_seats_per_expander * params.price_per_seat;
        let expanded_user_revenue = params.base_price + expansion_cost_only;
        let expanded_user_count = (customers * (params.expansion_rate / 100.0)).round().max(0.0) as u32;
        let standard_user_count = params.total_customers.saturating_sub(expanded_user_count);
        let total_revenue_from_expanded = expanded_user_count as f64 * expanded_user_revenue;
        let total_revenue_from_standard = standard_user_count as f64 * params.base_price;

        let mrr = arpu * customers;
        let arr = mrr * 12.0;
        let gross_profit_per_user = arpu * margin;
        let total_gross_profit = mrr * margin;

        let churned_mrr = mrr * churn;
        let churned_arr = churned_mrr * 12.0;
        let churned_gross_profit = total_gross_profit * churn;

        // Zero churn would mean an infinite lifetime; reported as 0
        let ltv = if params.monthly_churn_rate > 0.0 {
            gross_profit_per_user / churn
        } else {
            0.0
        };
        let customer_lifetime_months = if params.monthly_churn_rate > 0.0 {
            100.0 / params.monthly_churn_rate
        } else {
            0.0
        };
        let payback_period_months = if gross_profit_per_user > 0.0 {
            params.cac / gross_profit_per_user
        } else {
            0.0
        };
        let ltv_cac_ratio = if params.cac > 0.0 { ltv / params.cac } else { 0.0 };

        Self {
            billable_seats_per_expander,
            weighted_seat_revenue,
            avg_upsell_revenue,
            arpu,
            expanded_user_revenue,
            expansion_cost_only,
            expanded_user_count,
            standard_user_count,
            total_revenue_from_expanded,
            total_revenue_from_standard,
            mrr,
            arr,
            gross_profit_per_user,
            total_gross_profit,
            churned_mrr,
            churned_arr,
            churned_gross_profit,
            net_mrr: mrr - churned_mrr,
            net_arr: arr - churned_arr,
            net_gross_profit: total_gross_profit - churned_gross_profit,
            ltv,
            payback_period_months,
            ltv_cac_ratio,
            customer_lifetime_months,
        }
    }

    /// Per-user ARPU stack (base + expansion + upsell)
    pub fn revenue_breakdown(&self, params: &ParameterSet) -> RevenueBreakdown {
        RevenueBreakdown {
            base: params.base_price,
            expansion: self.weighted_seat_revenue,
            upsell: self.avg_upsell_revenue,
            total: self.arpu,
        }
    }
}

/// Compute derived metrics for a parameter set
pub fn calculate(params: &ParameterSet) -> DerivedMetrics {
    DerivedMetrics::from_params(params)
}

/// Components of ARPU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub base: f64,
    pub expansion: f64,
    pub upsell: f64,
    pub total: f64,
}
