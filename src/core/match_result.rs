use serde::{Deserialize, Serialize};

/// Outcome of scoring one candidate against one query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Whether every query character was found, in order, in the sort key
    pub matched: bool,

    /// Query the sort key was compared to
    pub query: String,

    /// How well the sort key matched. Higher is better, may be negative.
    pub score: f64,

    /// String the query was compared to
    pub sort_key: String,
}

impl MatchResult {
    pub fn new(
        matched: bool,
        query: impl Into<String>,
        score: f64,
        sort_key: impl Into<String>,
    ) -> Self {
        Self {
            matched,
            query: query.into(),
            score,
            sort_key: sort_key.into(),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
