//! # KissBot Fuzzy Sort
//!
//! Alfred-style fuzzy sorting for launcher and picker UIs:
//! - Single-pass subsequence scorer with tunable bonuses and penalties
//! - In-place ranking of any collection implementing [`Sortable`]
//! - Natural-order tie-break for equal scores
//! - Filtering front-end with score cutoff and result limit
//!
//! ## Example Usage
//!
//! ```rust
//! use kissbot_fuzzy_sort::{sort_strings, FuzzyEngine};
//!
//! let mut dirs = vec!["Documents", "Downloads", "dotfiles", "Desktop"];
//! let results = sort_strings(&mut dirs, "do");
//!
//! assert!(results.iter().all(|r| r.matched));
//! assert_eq!(dirs.last(), Some(&"Desktop"));
//!
//! let engine = FuzzyEngine::default();
//! let kept = engine.filter_strings(vec!["bob", "alice", "abel"], "a");
//! assert_eq!(kept.len(), 2);
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;

// Re-export primary types
pub use core::{MatchResult, WeightConfig};
pub use engine::{FilterOptions, FuzzyEngine, Ranked};
pub use error::{FuzzySortError, Result};
pub use ranking::{
    rank, rank_default, score, sort_strings, sort_strings_with, KeyedSlice, Sortable, Sorter,
    StringSlice,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
