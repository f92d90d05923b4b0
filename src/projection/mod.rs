//! Time and scale projections built on the derived unit economics

mod state;
mod engine;
mod series;
mod scale;

pub use state::{GrowthState, monthly_growth_rate};
pub use engine::{GrowthProjector, ProjectionConfig, MAX_HORIZON_MONTHS};
pub use series::{ChartMode, ProjectionPoint, ProjectionResult, ProjectionSummary, ScaleCurve, ScalePoint};
pub use scale::ScaleProjector;
