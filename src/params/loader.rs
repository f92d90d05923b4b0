//! Load parameter sets from JSON files and scenario CSVs

use super::ParameterSet;
use crate::error::SimResult;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A named parameter set from a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub params: ParameterSet,
}

/// Raw CSV row; column names match the JSON field names
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "basePrice")]
    base_price: f64,
    #[serde(rename = "includedSeats")]
    included_seats: u32,
    #[serde(rename = "pricePerSeat")]
    price_per_seat: f64,
    #[serde(rename = "upsellPrice")]
    upsell_price: f64,
    #[serde(rename = "upsellTakeRate")]
    upsell_take_rate: f64,
    #[serde(rename = "expansionRate")]
    expansion_rate: f64,
    #[serde(rename = "avgSeatsPerExpandedAccount")]
    avg_seats_per_expanded_account: f64,
    #[serde(rename = "totalCustomers")]
    total_customers: u32,
    #[serde(rename = "yearlyGrowthRate")]
    yearly_growth_rate: f64,
    #[serde(rename = "monthlyNewCustomers")]
    monthly_new_customers: f64,
    #[serde(rename = "monthlyChurnRate")]
    monthly_churn_rate: f64,
    #[serde(rename = "cac")]
    cac: f64,
    #[serde(rename = "grossMarginPct")]
    gross_margin_pct: f64,
}

impl CsvRow {
    fn into_scenario(self) -> Scenario {
        let params = ParameterSet {
            base_price: self.base_price,
            included_seats: self.included_seats,
            price_per_seat: self.price_per_seat,
            upsell_price: self.upsell_price,
            upsell_take_rate: self.upsell_take_rate,
            expansion_rate: self.expansion_rate,
            avg_seats_per_expanded_account: self.avg_seats_per_expanded_account,
            total_customers: self.total_customers,
            yearly_growth_rate: self.yearly_growth_rate,
            monthly_new_customers: self.monthly_new_customers,
            monthly_churn_rate: self.monthly_churn_rate,
            cac: self.cac,
            gross_margin_pct: self.gross_margin_pct,
        };

        Scenario {
            name: self.scenario,
            params: params.clamp_to_domain(),
        }
    }
}

/// Load a single parameter set from a JSON file; missing fields take defaults
pub fn load_parameters<P: AsRef<Path>>(path: P) -> SimResult<ParameterSet> {
    let file = File::open(path)?;
    let params: ParameterSet = serde_json::from_reader(BufReader::new(file))?;
    Ok(params.clamp_to_domain())
}

/// Parse a single parameter set from a JSON string
pub fn parse_parameters(json: &str) -> SimResult<ParameterSet> {
    let params: ParameterSet = serde_json::from_str(json)?;
    Ok(params.clamp_to_domain())
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> SimResult<Vec<Scenario>> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> SimResult<Vec<Scenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }

    log::info!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIOS_CSV: &str = "\
Scenario,basePrice,includedSeats,pricePerSeat,upsellPrice,upsellTakeRate,expansionRate,avgSeatsPerExpandedAccount,totalCustomers,yearlyGrowthRate,monthlyNewCustomers,monthlyChurnRate,cac,grossMarginPct
baseline,49,1,15,99,20,30,5,100,80,10,5,200,85
premium,129,3,25,0,0,50,8,40,40,2,2,900,78
overdriven,10,1,5,20,150,30,2,10,0,0,120,50,85
";

    #[test]
    fn test_load_scenarios_from_reader() {
        let scenarios = load_scenarios_from_reader(SCENARIOS_CSV.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 3);

        assert_eq!(scenarios[0].name, "baseline");
        assert_eq!(scenarios[0].params, ParameterSet::default());

        assert_eq!(scenarios[1].name, "premium");
        assert_eq!(scenarios[1].params.included_seats, 3);
        assert_eq!(scenarios[1].params.cac, 900.0);
    }

    #[test]
    fn test_scenarios_are_clamped() {
        let scenarios = load_scenarios_from_reader(SCENARIOS_CSV.as_bytes()).unwrap();
        let overdriven = &scenarios[2].params;
        assert_eq!(overdriven.upsell_take_rate, 100.0);
        assert_eq!(overdriven.monthly_churn_rate, 100.0);
    }

    #[test]
    fn test_bad_row_is_an_error() {
        let csv = "Scenario,basePrice\nbroken,abc\n";
        assert!(load_scenarios_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_sample_scenarios() {
        let scenarios = load_scenarios("data/scenarios.csv").expect("Failed to load scenarios");
        assert_eq!(scenarios.len(), 5);
        assert_eq!(scenarios[0].name, "baseline");
        assert_eq!(scenarios[4].params.monthly_churn_rate, 9.0);
    }

    #[test]
    fn test_parse_parameters() {
        let params = parse_parameters(r#"{"monthlyChurnRate": 2.5}"#).unwrap();
        assert_eq!(params.monthly_churn_rate, 2.5);
        assert!(parse_parameters("not json").is_err());
    }
}
