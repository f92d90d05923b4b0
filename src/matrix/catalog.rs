//! Static catalog of scoring keys and the matrices that pair them

use serde::{Deserialize, Serialize};

/// Ordered score keys understood by the scoring service (all 0-100)
pub static SCORE_KEYS: [&str; 25] = [
    "netMargin",
    "grossMargin",
    "arpu",
    "ltv",
    "tam",
    "sam",
    "som",
    "cac",
    "shippingSpeed",
    "quality",
    "shareOpp",
    "cognitiveLoad",
    "marketSize",
    "csat",
    "clarity",
    "buyability",
    "control",
    "risk",
    "complexity",
    "mindShare",
    "humanInput",
    "aiAutonomy",
    "timeInput",
    "output",
    "frequency",
];

/// Score given to every key a new business has no value for
pub const DEFAULT_SCORE: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixGroup {
    Financials,
    Market,
    Product,
    Operations,
}

/// One 2D matrix: a pair of score keys plotted against each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSpec {
    pub id: &'static str,
    pub group: MatrixGroup,
    pub x_key: &'static str,
    pub y_key: &'static str,
}

const fn matrix(id: &'static str, group: MatrixGroup, x_key: &'static str, y_key: &'static str) -> MatrixSpec {
    MatrixSpec { id, group, x_key, y_key }
}

pub static MATRICES: [MatrixSpec; 21] = [
    matrix("net-margin", MatrixGroup::Financials, "frequency", "netMargin"),
    matrix("gross-margin", MatrixGroup::Financials, "frequency", "grossMargin"),
    matrix("freq-arpu", MatrixGroup::Financials, "frequency", "arpu"),
    matrix("freq-ltv", MatrixGroup::Financials, "frequency", "ltv"),
    matrix("buying-freq-1y", MatrixGroup::Financials, "frequency", "buyingFreq1y"),
    matrix("buying-freq-5y", MatrixGroup::Financials, "frequency", "buyingFreq5y"),
    matrix("tam-arpu", MatrixGroup::Market, "tam", "arpu"),
    matrix("sam-arpu", MatrixGroup::Market, "sam", "arpu"),
    matrix("som-arpu", MatrixGroup::Market, "som", "arpu"),
    matrix("ltv-cac", MatrixGroup::Market, "cac", "ltv"),
    matrix("gender-distribution", MatrixGroup::Market, "womenPercent", "menPercent"),
    matrix("shipping", MatrixGroup::Product, "shippingSpeed", "quality"),
    matrix("virality", MatrixGroup::Product, "frequency", "shareOpp"),
    matrix("cognitive", MatrixGroup::Product, "cognitiveLoad", "arpu"),
    matrix("pmf", MatrixGroup::Product, "marketSize", "csat"),
    matrix("sales-friction", MatrixGroup::Product, "clarity", "buyability"),
    matrix("risk-control", MatrixGroup::Operations, "control", "risk"),
    matrix("tech-value", MatrixGroup::Operations, "complexity", "arpu"),
    matrix("mindshare", MatrixGroup::Operations, "frequency", "mindShare"),
    matrix("cyborg", MatrixGroup::Operations, "humanInput", "aiAutonomy"),
    matrix("leverage", MatrixGroup::Operations, "timeInput", "output"),
];

/// Look up a matrix by id
pub fn find_matrix(id: &str) -> Option<&'static MatrixSpec> {
    MATRICES.iter().find(|m| m.id == id)
}

/// Matrices of one group, in catalog order
pub fn matrices_in_group(group: MatrixGroup) -> impl Iterator<Item = &'static MatrixSpec> {
    MATRICES.iter().filter(move |m| m.group == group)
}

/// Every distinct key referenced by the catalog, in first-use order
pub fn catalog_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = Vec::new();
    for m in &MATRICES {
        for key in [m.x_key, m.y_key] {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}

/// True if `key` is a scoring key or is plotted by some matrix
pub fn is_known_key(key: &str) -> bool {
    SCORE_KEYS.contains(&key) || MATRICES.iter().any(|m| m.x_key == key || m.y_key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_matrix_ids_unique() {
        let ids: HashSet<_> = MATRICES.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), MATRICES.len());
    }

    #[test]
    fn test_catalog_covers_every_score_key() {
        let keys = catalog_keys();
        for key in SCORE_KEYS {
            assert!(keys.contains(&key), "{} not plotted by any matrix", key);
        }
        assert_eq!(keys[0], "frequency");
        assert_eq!(keys.len(), 29);
    }

    #[test]
    fn test_lookup() {
        let ltv_cac = find_matrix("ltv-cac").unwrap();
        assert_eq!((ltv_cac.x_key, ltv_cac.y_key), ("cac", "ltv"));
        assert!(find_matrix("nope").is_none());
        assert_eq!(matrices_in_group(MatrixGroup::Operations).count(), 5);
        assert!(is_known_key("womenPercent"));
        assert!(!is_known_key("shoeSize"));
    }
}
