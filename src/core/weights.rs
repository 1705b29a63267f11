//! Bonuses and penalties used by the fuzzy scorer.
//!
//! Six independent parameters, all plain `f64`:
//! - adjacency    : bonus when the previous character also matched
//! - separator    : bonus when the match follows `_` or a space
//! - camel        : bonus when the match crosses a lower→upper boundary
//! - leading      : per-character penalty before the first match
//! - max leading  : floor for the leading penalty
//! - unmatched    : penalty for every character that doesn't match

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{FuzzySortError, Result};

/// Bonus for adjacent matches
pub const DEFAULT_ADJACENCY_BONUS: f64 = 5.0;
/// Bonus if the match is after a separator
pub const DEFAULT_SEPARATOR_BONUS: f64 = 10.0;
/// Bonus if match is uppercase and previous is lower
pub const DEFAULT_CAMEL_BONUS: f64 = 10.0;
/// Penalty applied for every letter in the string before the first match
pub const DEFAULT_LEADING_LETTER_PENALTY: f64 = -3.0;
/// Maximum penalty for leading letters
pub const DEFAULT_MAX_LEADING_LETTER_PENALTY: f64 = -9.0;
/// Penalty for every letter that doesn't match
pub const DEFAULT_UNMATCHED_LETTER_PENALTY: f64 = -1.0;

/// Weight configuration for fuzzy scoring.
///
/// No validation is performed: any float is accepted, including values that
/// turn a bonus into a penalty. Keeping the values sane is up to the caller.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use kissbot_fuzzy_sort::WeightConfig;
///
/// let weights = WeightConfig::default();
/// assert_eq!(weights.adjacency_bonus, 5.0);
///
/// let mut config = HashMap::new();
/// config.insert("camel_bonus".to_string(), 20.0);
/// let weights = WeightConfig::from_config(&config);
/// assert_eq!(weights.camel_bonus, 20.0);
/// assert_eq!(weights.separator_bonus, 10.0); // default
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    /// Bonus for adjacent matches
    pub adjacency_bonus: f64,

    /// Bonus if the match is after a separator
    pub separator_bonus: f64,

    /// Bonus if match is uppercase and previous is lower
    pub camel_bonus: f64,

    /// Penalty per letter before the first match (negative)
    pub leading_letter_penalty: f64,

    /// Most negative value the leading penalty may reach
    pub max_leading_letter_penalty: f64,

    /// Penalty for every letter that doesn't match (negative)
    pub unmatched_letter_penalty: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            adjacency_bonus: DEFAULT_ADJACENCY_BONUS,
            separator_bonus: DEFAULT_SEPARATOR_BONUS,
            camel_bonus: DEFAULT_CAMEL_BONUS,
            leading_letter_penalty: DEFAULT_LEADING_LETTER_PENALTY,
            max_leading_letter_penalty: DEFAULT_MAX_LEADING_LETTER_PENALTY,
            unmatched_letter_penalty: DEFAULT_UNMATCHED_LETTER_PENALTY,
        }
    }
}

impl WeightConfig {
    /// Names accepted by [`WeightConfig::with_weight`] and [`WeightConfig::from_config`]
    pub const KEYS: [&'static str; 6] = [
        "adjacency_bonus",
        "separator_bonus",
        "camel_bonus",
        "leading_letter_penalty",
        "max_leading_letter_penalty",
        "unmatched_letter_penalty",
    ];

    /// Creates a configuration with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from a flat key/value map, falling back to
    /// the default for every key that is absent. Unknown keys are ignored.
    pub fn from_config(config: &HashMap<String, f64>) -> Self {
        let defaults = Self::default();

        Self {
            adjacency_bonus: config
                .get("adjacency_bonus")
                .copied()
                .unwrap_or(defaults.adjacency_bonus),
            separator_bonus: config
                .get("separator_bonus")
                .copied()
                .unwrap_or(defaults.separator_bonus),
            camel_bonus: config
                .get("camel_bonus")
                .copied()
                .unwrap_or(defaults.camel_bonus),
            leading_letter_penalty: config
                .get("leading_letter_penalty")
                .copied()
                .unwrap_or(defaults.leading_letter_penalty),
            max_leading_letter_penalty: config
                .get("max_leading_letter_penalty")
                .copied()
                .unwrap_or(defaults.max_leading_letter_penalty),
            unmatched_letter_penalty: config
                .get("unmatched_letter_penalty")
                .copied()
                .unwrap_or(defaults.unmatched_letter_penalty),
        }
    }

    /// Parses a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON weights file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Returns a copy with the weight called `key` set to `value`.
    pub fn with_weight(mut self, key: &str, value: f64) -> Result<Self> {
        let slot = match key {
            "adjacency_bonus" => &mut self.adjacency_bonus,
            "separator_bonus" => &mut self.separator_bonus,
            "camel_bonus" => &mut self.camel_bonus,
            "leading_letter_penalty" => &mut self.leading_letter_penalty,
            "max_leading_letter_penalty" => &mut self.max_leading_letter_penalty,
            "unmatched_letter_penalty" => &mut self.unmatched_letter_penalty,
            other => return Err(FuzzySortError::UnknownWeight(other.to_string())),
        };
        *slot = value;
        Ok(self)
    }

    /// Applies a `key=value` override, e.g. `"camel_bonus=15"`.
    pub fn apply_override(self, setting: &str) -> Result<Self> {
        let (key, value) = setting
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{}'", setting))?;

        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a number", value.trim()))?;

        self.with_weight(key.trim(), value)
    }

    /// Converts to a flat map keyed like [`WeightConfig::from_config`].
    pub fn to_map(&self) -> HashMap<&'static str, f64> {
        let mut map = HashMap::new();
        map.insert("adjacency_bonus", self.adjacency_bonus);
        map.insert("separator_bonus", self.separator_bonus);
        map.insert("camel_bonus", self.camel_bonus);
        map.insert("leading_letter_penalty", self.leading_letter_penalty);
        map.insert("max_leading_letter_penalty", self.max_leading_letter_penalty);
        map.insert("unmatched_letter_penalty", self.unmatched_letter_penalty);
        map
    }
}

impl std::fmt::Display for WeightConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "adjacency={}, separator={}, camel={}, leading={} (max {}), unmatched={}",
            self.adjacency_bonus,
            self.separator_bonus,
            self.camel_bonus,
            self.leading_letter_penalty,
            self.max_leading_letter_penalty,
            self.unmatched_letter_penalty
        )
    }
}
