use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::core::{MatchResult, WeightConfig};
use crate::ranking::{KeyedSlice, Sortable, Sorter};

/// Post-ranking filter settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Drop matches scoring below this value
    pub min_score: Option<f64>,
    /// Keep at most this many matches
    pub max_results: Option<usize>,
}

/// Item paired with the result it was ranked by
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub result: MatchResult,
}

impl<T> Ranked<T> {
    pub fn new(item: T, result: MatchResult) -> Self {
        Self { item, result }
    }
}

/// Fuzzy sorting front-end: ranks collections and filters out the items
/// that don't match.
#[derive(Debug, Clone, Default)]
pub struct FuzzyEngine {
    weights: WeightConfig,
    options: FilterOptions,
}

impl FuzzyEngine {
    pub fn new(weights: WeightConfig) -> Self {
        Self {
            weights,
            options: FilterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Sorts `data` in place and returns the parallel results, non-matches
    /// included.
    pub fn rank<S: Sortable + ?Sized>(&self, data: &mut S, query: &str) -> Vec<MatchResult> {
        let start = Instant::now();

        let mut sorter = Sorter::new(data, self.weights);
        sorter.sort(query);
        let results = sorter.into_results();

        tracing::debug!(
            "Ranked {} items against {:?} in {:.3}ms",
            results.len(),
            query,
            start.elapsed().as_secs_f64() * 1000.0
        );

        results
    }

    /// Ranks `items` by `key` and keeps only the matches, best first.
    ///
    /// Applies `min_score` and `max_results` from the engine's options.
    pub fn filter<T, K>(&self, mut items: Vec<T>, query: &str, key: K) -> Vec<Ranked<T>>
    where
        T: Ord,
        K: Fn(&T) -> String,
    {
        let results = self.rank(&mut KeyedSlice::new(&mut items, key), query);
        self.keep_matches(items, results, query)
    }

    /// [`FuzzyEngine::filter`] for plain strings
    pub fn filter_strings<T>(&self, items: Vec<T>, query: &str) -> Vec<Ranked<T>>
    where
        T: AsRef<str> + Ord,
    {
        self.filter(items, query, |s: &T| s.as_ref().to_string())
    }

    fn keep_matches<T>(
        &self,
        items: Vec<T>,
        results: Vec<MatchResult>,
        query: &str,
    ) -> Vec<Ranked<T>> {
        let total = items.len();
        let min_score = self.options.min_score;

        let mut kept: Vec<Ranked<T>> = items
            .into_iter()
            .zip(results)
            .filter(|(_, r)| r.matched)
            .filter(|(_, r)| min_score.map_or(true, |min| r.score >= min))
            .map(|(item, result)| Ranked::new(item, result))
            .collect();

        if let Some(max) = self.options.max_results {
            kept.truncate(max);
        }

        tracing::debug!("{} of {} items match {:?}", kept.len(), total, query);
        kept
    }
}
