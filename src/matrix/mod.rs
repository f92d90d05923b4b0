//! Strategy matrices: scoring catalog, business records and their store

mod catalog;
mod business;
mod board;
mod scoring;

pub use catalog::{
    MatrixGroup, MatrixSpec, MATRICES, SCORE_KEYS, DEFAULT_SCORE,
    catalog_keys, find_matrix, is_known_key, matrices_in_group,
};
pub use business::{Business, Scores, default_scores, to_score};
pub use board::{BusinessBoard, PALETTE};
pub use scoring::{ScoreRequest, PatternQuery, parse_score_response};
