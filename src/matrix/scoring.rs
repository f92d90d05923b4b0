//! Payloads exchanged with the external scoring/commentary service.
//!
//! The service itself (an LLM behind HTTP) is not called from here; this
//! module builds its request bodies and validates its replies.

use serde::Serialize;
use serde_json::Value;

use super::business::{to_score, Business, Scores};
use super::catalog::SCORE_KEYS;
use crate::error::{SimError, SimResult};

/// Request body for scoring a free-text business description
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRequest<'a> {
    pub description: &'a str,
    pub keys: &'static [&'static str],
}

impl<'a> ScoreRequest<'a> {
    pub fn new(description: &'a str) -> Self {
        Self {
            description,
            keys: &SCORE_KEYS,
        }
    }
}

/// Request body for free-text analysis over the current dataset
#[derive(Debug, Clone, Serialize)]
pub struct PatternQuery<'a> {
    pub businesses: &'a [Business],
    pub query: &'a str,
}

/// Parse the scoring service's reply.
///
/// Accepts `{"scores": {...}}` or a bare key map. Only known score keys
/// are kept; each value is rounded and clamped to 0-100. A reply with no
/// usable keys is an error.
pub fn parse_score_response(json: &str) -> SimResult<Scores> {
    let value: Value = serde_json::from_str(json)?;
    let map = match value.get("scores") {
        Some(Value::Object(map)) => map,
        Some(_) => return Err(SimError::InvalidScoreResponse("'scores' is not an object".to_string())),
        None => value
            .as_object()
            .ok_or_else(|| SimError::InvalidScoreResponse("expected a JSON object".to_string()))?,
    };

    let scores: Scores = SCORE_KEYS
        .iter()
        .filter_map(|&key| {
            let raw = map.get(key)?.as_f64()?;
            Some((key.to_string(), to_score(raw)))
        })
        .collect();

    let ignored = map.len() - scores.len();
    if ignored > 0 {
        log::warn!("Ignored {} unknown or non-numeric score entries", ignored);
    }

    if scores.is_empty() {
        return Err(SimError::InvalidScoreResponse("no recognised score keys".to_string()));
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_scores() {
        let scores = parse_score_response(r#"{"scores": {"netMargin": 35, "tam": 101, "risk": -4, "vibes": 99}}"#).unwrap();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores["netMargin"], 35);
        assert_eq!(scores["tam"], 100);
        assert_eq!(scores["risk"], 0);
        assert!(!scores.contains_key("vibes"));
    }

    #[test]
    fn test_bare_map() {
        let scores = parse_score_response(r#"{"frequency": 72.4, "output": "high"}"#).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["frequency"], 72);
    }

    #[test]
    fn test_rejects_unusable_replies() {
        assert!(matches!(parse_score_response("[1, 2]"), Err(SimError::InvalidScoreResponse(_))));
        assert!(matches!(parse_score_response(r#"{"scores": 5}"#), Err(SimError::InvalidScoreResponse(_))));
        assert!(matches!(parse_score_response(r#"{"vibes": 5}"#), Err(SimError::InvalidScoreResponse(_))));
        assert!(matches!(parse_score_response("nope"), Err(SimError::Json(_))));
    }

    #[test]
    fn test_request_bodies() {
        let request = serde_json::to_value(ScoreRequest::new("A meal-kit delivery startup")).unwrap();
        assert_eq!(request["keys"].as_array().unwrap().len(), 25);

        let businesses = vec![Business::new(1, "Acme", "#000000")];
        let query = serde_json::to_value(PatternQuery { businesses: &businesses, query: "Who has the best moat?" }).unwrap();
        assert_eq!(query["businesses"][0]["name"], "Acme");
    }
}
