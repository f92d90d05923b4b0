//! Error types for loading, importing and editing simulator inputs
//!
//! The numeric core never fails: degenerate inputs saturate to 0 instead.
//! Errors only come from the boundary: files, JSON, business records and
//! oversized run requests.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Item {index} missing 'name'")]
    MissingName { index: usize },

    #[error("Business {id} not found")]
    BusinessNotFound { id: u64 },

    #[error("Matrix '{id}' not found")]
    MatrixNotFound { id: String },

    #[error("Unknown score key '{key}'")]
    UnknownScoreKey { key: String },

    #[error("Unknown parameter '{name}'")]
    UnknownParameter { name: String },

    #[error("Horizon of {months} months exceeds the {max}-month limit")]
    HorizonTooLong { months: u32, max: u32 },

    #[error("Sweep of {len} values exceeds the {max}-value limit")]
    SweepTooLong { len: usize, max: usize },

    #[error("Invalid score response: {0}")]
    InvalidScoreResponse(String),
}

pub type SimResult<T> = Result<T, SimError>;
