//! Business records plotted on the matrices

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::{catalog_keys, DEFAULT_SCORE};

/// Score key -> 0-100 value
pub type Scores = BTreeMap<String, u8>;

/// A business as stored, exported and imported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub desc: String,
    pub scores: Scores,
    /// Scores from the last analysis; `reset` restores these
    pub initial_scores: Scores,
    pub reasoning: String,
}

/// Every catalog key set to the default score
pub fn default_scores() -> Scores {
    catalog_keys()
        .into_iter()
        .map(|k| (k.to_string(), DEFAULT_SCORE))
        .collect()
}

/// Round and clamp a raw value onto the 0-100 score scale
pub fn to_score(value: f64) -> u8 {
    if value.is_finite() {
        value.round().clamp(0.0, 100.0) as u8
    } else {
        DEFAULT_SCORE
    }
}

impl Business {
    /// New business with default scores everywhere
    pub fn new(id: u64, name: impl Into<String>, color: impl Into<String>) -> Self {
        let scores = default_scores();
        Self {
            id,
            name: name.into(),
            color: color.into(),
            desc: String::new(),
            initial_scores: scores.clone(),
            scores,
            reasoning: String::new(),
        }
    }

    pub fn score(&self, key: &str) -> Option<u8> {
        self.scores.get(key).copied()
    }

    /// (x, y) position on a matrix, if both keys are scored
    pub fn position(&self, x_key: &str, y_key: &str) -> Option<(u8, u8)> {
        Some((self.score(x_key)?, self.score(y_key)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Business {
        let mut b = Business::new(1, "FedEx", "#4f46e5");
        b.desc = "Global logistics giant with massive physical infrastructure.".to_string();
        b.scores.insert("frequency".to_string(), 60);
        b.scores.insert("netMargin".to_string(), 15);
        b.initial_scores = b.scores.clone();
        b.scores.insert("netMargin".to_string(), 22);
        b.reasoning = "Hub-and-spoke efficiency with an infrastructure moat.".to_string();
        b
    }

    #[test]
    fn test_json_round_trip_preserves_all_fields() {
        let business = sample();
        let json = serde_json::to_string(&business).unwrap();
        let parsed: Business = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, business);
        assert_eq!(parsed.initial_scores.get("netMargin"), Some(&15));
        assert_eq!(parsed.scores.get("netMargin"), Some(&22));
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        for field in ["id", "name", "color", "desc", "scores", "initialScores", "reasoning"] {
            assert!(value.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn test_to_score() {
        assert_eq!(to_score(49.5), 50);
        assert_eq!(to_score(-3.0), 0);
        assert_eq!(to_score(140.0), 100);
        assert_eq!(to_score(f64::NAN), DEFAULT_SCORE);
    }

    #[test]
    fn test_position() {
        let b = sample();
        assert_eq!(b.position("frequency", "netMargin"), Some((60, 22)));
        assert_eq!(b.position("frequency", "shoeSize"), None);
    }
}
