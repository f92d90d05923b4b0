//! In-memory store of businesses with JSON import/export and score edits

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

use super::business::{default_scores, to_score, Business, Scores};
use super::catalog::{find_matrix, is_known_key};
use crate::error::{SimError, SimResult};

/// Colours assigned to imported businesses that have none
pub const PALETTE: [&str; 12] = [
    "#ef4444", "#f97316", "#f59e0b", "#84cc16", "#10b981", "#06b6d4",
    "#0ea5e9", "#3b82f6", "#6366f1", "#8b5cf6", "#d946ef", "#f43f5e",
];

/// Loosely-typed import record; everything but `name` may be missing
#[derive(Debug, Deserialize)]
struct ImportRecord {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    scores: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    reasoning: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportPayload {
    Many(Vec<ImportRecord>),
    One(ImportRecord),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessBoard {
    businesses: Vec<Business>,
}

impl BusinessBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_businesses(businesses: Vec<Business>) -> Self {
        Self { businesses }
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: u64) -> SimResult<&mut Business> {
        self.businesses
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(SimError::BusinessNotFound { id })
    }

    /// Import one business object or an array of them.
    ///
    /// All-or-nothing: if any item lacks a name, nothing is added. Returns
    /// the number of businesses imported.
    ///
    /// Ids stay unique across the board. A missing, zero or already-taken id
    /// is replaced by the next id above everything assigned so far.
    pub fn import_json(&mut self, json: &str) -> SimResult<usize> {
        let records = match serde_json::from_str::<ImportPayload>(json)? {
            ImportPayload::Many(records) => records,
            ImportPayload::One(record) => vec![record],
        };

        let mut taken: BTreeSet<u64> = self.businesses.iter().map(|b| b.id).collect();
        let mut next_id = taken.last().map_or(1, |max| max.saturating_add(1));
        let existing = self.businesses.len();

        let imported = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| -> SimResult<Business> {
                let id = match record.id {
                    Some(id) if id != 0 && !taken.contains(&id) => id,
                    requested => {
                        if let Some(id) = requested.filter(|&id| id != 0) {
                            log::warn!("Business id {} already in use, assigning {}", id, next_id);
                        }
                        next_id
                    }
                };
                taken.insert(id);
                next_id = next_id.max(id.saturating_add(1));

                let name = record
                    .name
                    .filter(|n| !n.is_empty())
                    .ok_or(SimError::MissingName { index: index + 1 })?;

                let mut scores = default_scores();
                for (key, value) in record.scores.unwrap_or_default() {
                    scores.insert(key, to_score(value));
                }

                Ok(Business {
                    id,
                    name,
                    color: record
                        .color
                        .unwrap_or_else(|| PALETTE[(existing + index) % PALETTE.len()].to_string()),
                    desc: record.desc.unwrap_or_default(),
                    initial_scores: scores.clone(),
                    scores,
                    reasoning: record.reasoning.unwrap_or_else(|| "Imported via JSON".to_string()),
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        let count = imported.len();
        self.businesses.extend(imported);
        log::info!("Imported {} business(es)", count);
        Ok(count)
    }

    /// All businesses as pretty-printed JSON
    pub fn export_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(&self.businesses)?)
    }

    /// Set a single score, clamped to 0-100
    pub fn set_score(&mut self, id: u64, key: &str, value: f64) -> SimResult<()> {
        if !is_known_key(key) {
            return Err(SimError::UnknownScoreKey { key: key.to_string() });
        }
        let business = self.get_mut(id)?;
        business.scores.insert(key.to_string(), to_score(value));
        Ok(())
    }

    /// Place a business on a matrix from normalized (x, y) in [0, 100]²,
    /// writing both of the matrix's score keys.
    pub fn place(&mut self, id: u64, matrix_id: &str, x: f64, y: f64) -> SimResult<()> {
        let matrix = find_matrix(matrix_id).ok_or_else(|| SimError::MatrixNotFound { id: matrix_id.to_string() })?;
        let business = self.get_mut(id)?;
        business.scores.insert(matrix.x_key.to_string(), to_score(x));
        business.scores.insert(matrix.y_key.to_string(), to_score(y));
        Ok(())
    }

    /// Replace scores with a fresh analysis; it also becomes the reset point
    pub fn apply_analysis(&mut self, id: u64, analysed: &Scores) -> SimResult<()> {
        let business = self.get_mut(id)?;
        business.scores.extend(analysed.iter().map(|(k, v)| (k.clone(), *v)));
        business.initial_scores = business.scores.clone();
        Ok(())
    }

    /// Restore scores to the last analysis
    pub fn reset(&mut self, id: u64) -> SimResult<()> {
        let business = self.get_mut(id)?;
        business.scores = business.initial_scores.clone();
        Ok(())
    }

    pub fn remove(&mut self, id: u64) -> SimResult<Business> {
        let index = self
            .businesses
            .iter()
            .position(|b| b.id == id)
            .ok_or(SimError::BusinessNotFound { id })?;
        Ok(self.businesses.remove(index))
    }
}
