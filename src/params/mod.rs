//! Simulator parameters and scenario loading

mod data;
pub mod loader;

pub use data::{ParameterSet, ParameterField};
pub use loader::{Scenario, load_parameters, parse_parameters, load_scenarios, load_scenarios_from_reader};
