//! Simulator input: the pricing, growth and retention sliders

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Complete set of simulator inputs
///
/// Percentages are stored as 0-100 values (e.g. `5.0` = 5%), matching the
/// slider ranges. Every output in the crate is a pure function of this
/// record; changing any field means recomputing everything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterSet {
    // Pricing
    /// Base subscription price per account per month
    pub base_price: f64,

    /// Seats included in the base price
    pub included_seats: u32,

    /// Price of each seat beyond the included allotment
    pub price_per_seat: f64,

    /// Monthly price of the add-on
    pub upsell_price: f64,

    /// Percent of customers buying the add-on (0-100)
    pub upsell_take_rate: f64,

    // Expansion
    /// Percent of customers paying for extra seats (0-100)
    pub expansion_rate: f64,

    /// Average team size of an account that expanded
    pub avg_seats_per_expanded_account: f64,

    // Customer base and growth
    /// Current customer count
    pub total_customers: u32,

    /// Yearly compounding growth rate (percent)
    pub yearly_growth_rate: f64,

    /// Linear net-adds per month, applied after growth and churn
    pub monthly_new_customers: f64,

    // Unit economics
    /// Percent of current customers lost each month (0-100)
    pub monthly_churn_rate: f64,

    /// Customer acquisition cost
    pub cac: f64,

    /// Gross margin percent (0-100)
    pub gross_margin_pct: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            base_price: 49.0,
            included_seats: 1,
            price_per_seat: 15.0,
            upsell_price: 99.0,
            upsell_take_rate: 20.0,
            expansion_rate: 30.0,
            avg_seats_per_expanded_account: 5.0,
            total_customers: 100,
            yearly_growth_rate: 80.0,
            monthly_new_customers: 10.0,
            monthly_churn_rate: 5.0,
            cac: 200.0,
            gross_margin_pct: 85.0,
        }
    }
}

/// Clamp to `[min, max]`, replacing NaN/inf with `fallback`
fn clamp_finite(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(min).min(max)
    } else {
        fallback
    }
}

impl ParameterSet {
    /// Bring every field into its slider range.
    ///
    /// The calculators assume range-constrained input and perform no
    /// validation of their own, so every loader runs this first.
    pub fn clamp_to_domain(&self) -> Self {
        let d = Self::default();
        let clamped = Self {
            base_price: clamp_finite(self.base_price, 0.0, f64::MAX, d.base_price),
            included_seats: self.included_seats.max(1),
            price_per_seat: clamp_finite(self.price_per_seat, 0.0, f64::MAX, d.price_per_seat),
            upsell_price: clamp_finite(self.upsell_price, 0.0, f64::MAX, d.upsell_price),
            upsell_take_rate: clamp_finite(self.upsell_take_rate, 0.0, 100.0, d.upsell_take_rate),
            expansion_rate: clamp_finite(self.expansion_rate, 0.0, 100.0, d.expansion_rate),
            avg_seats_per_expanded_account: clamp_finite(
                self.avg_seats_per_expanded_account,
                1.0,
                f64::MAX,
                d.avg_seats_per_expanded_account,
            ),
            total_customers: self.total_customers,
            yearly_growth_rate: clamp_finite(self.yearly_growth_rate, -100.0, f64::MAX, d.yearly_growth_rate),
            monthly_new_customers: clamp_finite(self.monthly_new_customers, 0.0, f64::MAX, d.monthly_new_customers),
            monthly_churn_rate: clamp_finite(self.monthly_churn_rate, 0.0, 100.0, d.monthly_churn_rate),
            cac: clamp_finite(self.cac, 0.0, f64::MAX, d.cac),
            gross_margin_pct: clamp_finite(self.gross_margin_pct, 0.0, 100.0, d.gross_margin_pct),
        };

        if clamped != *self {
            log::warn!("Parameter set clamped to slider ranges: {:?}", clamped);
        }
        clamped
    }

    /// Gross margin as a fraction
    pub fn margin(&self) -> f64 {
        self.gross_margin_pct / 100.0
    }

    /// Monthly churn as a fraction
    pub fn churn(&self) -> f64 {
        self.monthly_churn_rate / 100.0
    }

    /// Return a copy with one field replaced
    pub fn with_field(&self, field: ParameterField, value: f64) -> Self {
        let mut params = *self;
        field.set(&mut params, value);
        params
    }
}

/// Addressable ParameterSet field, used for sensitivity sweeps and overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterField {
    BasePrice,
    IncludedSeats,
    PricePerSeat,
    UpsellPrice,
    UpsellTakeRate,
    ExpansionRate,
    AvgSeatsPerExpandedAccount,
    TotalCustomers,
    YearlyGrowthRate,
    MonthlyNewCustomers,
    MonthlyChurnRate,
    Cac,
    GrossMarginPct,
}

impl ParameterField {
    pub const ALL: [ParameterField; 13] = [
        ParameterField::BasePrice,
        ParameterField::IncludedSeats,
        ParameterField::PricePerSeat,
        ParameterField::UpsellPrice,
        ParameterField::UpsellTakeRate,
        ParameterField::ExpansionRate,
        ParameterField::AvgSeatsPerExpandedAccount,
        ParameterField::TotalCustomers,
        ParameterField::YearlyGrowthRate,
        ParameterField::MonthlyNewCustomers,
        ParameterField::MonthlyChurnRate,
        ParameterField::Cac,
        ParameterField::GrossMarginPct,
    ];

    /// JSON/CSV column name
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterField::BasePrice => "basePrice",
            ParameterField::IncludedSeats => "includedSeats",
            ParameterField::PricePerSeat => "pricePerSeat",
            ParameterField::UpsellPrice => "upsellPrice",
            ParameterField::UpsellTakeRate => "upsellTakeRate",
            ParameterField::ExpansionRate => "expansionRate",
            ParameterField::AvgSeatsPerExpandedAccount => "avgSeatsPerExpandedAccount",
            ParameterField::TotalCustomers => "totalCustomers",
            ParameterField::YearlyGrowthRate => "yearlyGrowthRate",
            ParameterField::MonthlyNewCustomers => "monthlyNewCustomers",
            ParameterField::MonthlyChurnRate => "monthlyChurnRate",
            ParameterField::Cac => "cac",
            ParameterField::GrossMarginPct => "grossMarginPct",
        }
    }

    pub fn from_name(name: &str) -> SimResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| SimError::UnknownParameter { name: name.to_string() })
    }

    pub fn get(&self, params: &ParameterSet) -> f64 {
        match self {
            ParameterField::BasePrice => params.base_price,
            ParameterField::IncludedSeats => params.included_seats as f64,
            ParameterField::PricePerSeat => params.price_per_seat,
            ParameterField::UpsellPrice => params.upsell_price,
            ParameterField::UpsellTakeRate => params.upsell_take_rate,
            ParameterField::ExpansionRate => params.expansion_rate,
            ParameterField::AvgSeatsPerExpandedAccount => params.avg_seats_per_expanded_account,
            ParameterField::TotalCustomers => params.total_customers as f64,
            ParameterField::YearlyGrowthRate => params.yearly_growth_rate,
            ParameterField::MonthlyNewCustomers => params.monthly_new_customers,
            ParameterField::MonthlyChurnRate => params.monthly_churn_rate,
            ParameterField::Cac => params.cac,
            ParameterField::GrossMarginPct => params.gross_margin_pct,
        }
    }

    /// Integer fields are rounded and floored at 0
    pub fn set(&self, params: &mut ParameterSet, value: f64) {
        match self {
            ParameterField::BasePrice => params.base_price = value,
            ParameterField::IncludedSeats => params.included_seats = value.round().max(0.0) as u32,
            ParameterField::PricePerSeat => params.price_per_seat = value,
            ParameterField::UpsellPrice => params.upsell_price = value,
            ParameterField::UpsellTakeRate => params.upsell_take_rate = value,
            ParameterField::ExpansionRate => params.expansion_rate = value,
            ParameterField::AvgSeatsPerExpandedAccount => params.avg_seats_per_expanded_account = value,
            ParameterField::TotalCustomers => params.total_customers = value.round().max(0.0) as u32,
            ParameterField::YearlyGrowthRate => params.yearly_growth_rate = value,
            ParameterField::MonthlyNewCustomers => params.monthly_new_customers = value,
            ParameterField::MonthlyChurnRate => params.monthly_churn_rate = value,
            ParameterField::Cac => params.cac = value,
            ParameterField::GrossMarginPct => params.gross_margin_pct = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: ParameterSet = serde_json::from_str(r#"{"basePrice": 79, "totalCustomers": 250}"#).unwrap();
        assert_eq!(params.base_price, 79.0);
        assert_eq!(params.total_customers, 250);
        assert_eq!(params.monthly_churn_rate, ParameterSet::default().monthly_churn_rate);
    }

    #[test]
    fn test_clamp_to_domain() {
        let params = ParameterSet {
            upsell_take_rate: 140.0,
            monthly_churn_rate: -3.0,
            included_seats: 0,
            gross_margin_pct: f64::NAN,
            yearly_growth_rate: -250.0,
            ..Default::default()
        };
        let clamped = params.clamp_to_domain();

        assert_eq!(clamped.upsell_take_rate, 100.0);
        assert_eq!(clamped.monthly_churn_rate, 0.0);
        assert_eq!(clamped.included_seats, 1);
        assert_eq!(clamped.gross_margin_pct, 85.0);
        assert_eq!(clamped.yearly_growth_rate, -100.0);
    }

    #[test]
    fn test_default_is_already_in_domain() {
        let params = ParameterSet::default();
        assert_eq!(params.clamp_to_domain(), params);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ParameterField::ALL {
            assert_eq!(ParameterField::from_name(field.as_str()).unwrap(), field);
        }
        assert!(ParameterField::from_name("churn").is_err());
    }

    #[test]
    fn test_with_field() {
        let base = ParameterSet::default();
        let params = base.with_field(ParameterField::TotalCustomers, 41.6);
        assert_eq!(params.total_customers, 42);
        assert_eq!(ParameterField::Cac.get(&base.with_field(ParameterField::Cac, 350.0)), 350.0);
    }
}
