use std::cmp::Ordering;

use crate::core::{MatchResult, WeightConfig};
use crate::ranking::scorer::score;
use crate::ranking::Sortable;

/// Fuzzy-sorts a [`Sortable`] collection in place.
///
/// Holds the per-index results of the last [`Sorter::sort`] call. The
/// buffer stays index-aligned with the collection: every swap applied to
/// the collection is applied to the buffer too.
pub struct Sorter<'a, S: Sortable + ?Sized> {
    data: &'a mut S,
    weights: WeightConfig,
    results: Vec<MatchResult>,
}

impl<'a, S: Sortable + ?Sized> Sorter<'a, S> {
    pub fn new(data: &'a mut S, weights: WeightConfig) -> Self {
        Self {
            data,
            weights,
            results: Vec::new(),
        }
    }

    /// Sorter using [`WeightConfig::default`]
    pub fn with_defaults(data: &'a mut S) -> Self {
        Self::new(data, WeightConfig::default())
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn data(&self) -> &S {
        &*self.data
    }

    /// Scores every element against `query`, then reorders the collection
    /// by descending score. Ties fall back to the collection's natural order.
    ///
    /// Returns the results, parallel to the reordered collection.
    pub fn sort(&mut self, query: &str) -> &[MatchResult] {
        let len = self.data.len();

        self.results = (0..len)
            .map(|i| score(&self.data.sort_key(i), query, &self.weights))
            .collect();

        // Sort positions against the frozen scores, then apply the
        // permutation so collection and results move together
        let mut order: Vec<usize> = (0..len).collect();
        {
            let results = &self.results;
            let data = &*self.data;
            order.sort_by(|&i, &j| compare_ranked(results, data, i, j));
        }
        self.apply_order(&order);

        tracing::trace!(query, len, "sorted collection");
        &self.results
    }

    /// Moves the element at `order[k]` to position `k` for every `k`,
    /// using swaps only.
    fn apply_order(&mut self, order: &[usize]) {
        let len = order.len();
        // position_of[original] = where that element currently sits
        let mut position_of: Vec<usize> = (0..len).collect();
        // original_at[position] = which element currently sits there
        let mut original_at: Vec<usize> = (0..len).collect();

        for (target, &wanted) in order.iter().enumerate() {
            let current = position_of[wanted];
            if current == target {
                continue;
            }

            self.data.swap(target, current);
            self.results.swap(target, current);

            let displaced = original_at[target];
            original_at[target] = wanted;
            original_at[current] = displaced;
            position_of[wanted] = target;
            position_of[displaced] = current;
        }
    }

    /// Whether the element at `i` matched. `None` before the first sort.
    pub fn is_match(&self, i: usize) -> Option<bool> {
        self.results.get(i).map(|r| r.matched)
    }

    /// Score of the element at `i`. `None` before the first sort.
    pub fn score(&self, i: usize) -> Option<f64> {
        self.results.get(i).map(|r| r.score)
    }

    pub fn result(&self, i: usize) -> Option<&MatchResult> {
        self.results.get(i)
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<MatchResult> {
        self.results
    }
}

/// Higher score first; exact ties delegate to the collection's order.
fn compare_ranked<S: Sortable + ?Sized>(
    results: &[MatchResult],
    data: &S,
    i: usize,
    j: usize,
) -> Ordering {
    let (a, b) = (results[i].score, results[j].score);
    if a == b {
        return data.compare(i, j);
    }
    match b.total_cmp(&a) {
        Ordering::Equal => data.compare(i, j),
        ordering => ordering,
    }
}

/// Sorts `data` against `query` and returns the results, parallel to the
/// reordered collection.
pub fn rank<S: Sortable + ?Sized>(
    data: &mut S,
    query: &str,
    weights: &WeightConfig,
) -> Vec<MatchResult> {
    let mut sorter = Sorter::new(data, *weights);
    sorter.sort(query);
    sorter.into_results()
}

/// [`rank`] with the default weights
pub fn rank_default<S: Sortable + ?Sized>(data: &mut S, query: &str) -> Vec<MatchResult> {
    rank(data, query, &WeightConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::cell::Cell;

    /// Vec-backed collection that counts key lookups and swaps
    struct Probe {
        items: Vec<String>,
        key_calls: Cell<usize>,
        swaps: usize,
    }

    impl Probe {
        fn new(items: &[&str]) -> Self {
            Self {
                items: items.iter().map(|s| s.to_string()).collect(),
                key_calls: Cell::new(0),
                swaps: 0,
            }
        }
    }

    impl Sortable for Probe {
        fn len(&self) -> usize {
            self.items.len()
        }

        fn compare(&self, i: usize, j: usize) -> Ordering {
            self.items[i].cmp(&self.items[j])
        }

        fn swap(&mut self, i: usize, j: usize) {
            self.swaps += 1;
            self.items.swap(i, j);
        }

        fn sort_key(&self, i: usize) -> Cow<'_, str> {
            self.key_calls.set(self.key_calls.get() + 1);
            Cow::Borrowed(&self.items[i])
        }
    }

    #[test]
    fn test_sort_orders_by_score() {
        let mut data = Probe::new(&["bob", "alice", "abel"]);
        let results = rank_default(&mut data, "a");

        assert_eq!(data.items, vec!["abel", "alice", "bob"]);
        assert!(results[0].matched && results[1].matched);
        assert!(!results[2].matched);
        assert_eq!(results[0].score, 7.0);
        assert_eq!(results[1].score, 6.0);
    }

    #[test]
    fn test_results_stay_aligned() {
        let mut data = Probe::new(&["zeta", "Zed", "a_z", "buzz", "z", "nothing"]);
        let results = rank_default(&mut data, "z");

        assert_eq!(results.len(), data.items.len());
        for (item, result) in data.items.iter().zip(&results) {
            assert_eq!(item, &result.sort_key);
        }
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_scores_computed_once_per_element() {
        let mut data = Probe::new(&["c", "b", "a", "ab", "ba"]);
        let mut sorter = Sorter::with_defaults(&mut data);
        sorter.sort("a");
        assert_eq!(sorter.data().key_calls.get(), 5);
    }

    #[test]
    fn test_ties_use_natural_order() {
        // Empty query: every single-letter key scores the same
        let mut data = Probe::new(&["c", "a", "b"]);
        let results = rank_default(&mut data, "");

        assert_eq!(data.items, vec!["a", "b", "c"]);
        assert!(results.iter().all(|r| r.matched && r.score == -1.0));
    }

    #[test]
    fn test_already_sorted_needs_no_swaps() {
        let mut data = Probe::new(&["abc", "xabc", "xxxxabc"]);
        rank_default(&mut data, "abc");
        assert_eq!(data.swaps, 0);
    }

    #[test]
    fn test_accessors_before_and_after_sort() {
        let mut data = Probe::new(&["foo", "bar"]);
        let mut sorter = Sorter::new(&mut data, WeightConfig::default());

        assert_eq!(sorter.is_match(0), None);
        assert_eq!(sorter.score(0), None);
        assert!(sorter.results().is_empty());

        sorter.sort("b");
        assert_eq!(sorter.is_match(0), Some(true));
        assert_eq!(sorter.is_match(1), Some(false));
        assert_eq!(sorter.result(0).map(|r| r.sort_key.as_str()), Some("bar"));
        assert!(sorter.score(0).unwrap() > sorter.score(1).unwrap());
        assert_eq!(sorter.result(2), None);
    }

    #[test]
    fn test_resort_recomputes() {
        let mut data = Probe::new(&["alpha", "beta"]);
        let mut sorter = Sorter::with_defaults(&mut data);

        sorter.sort("b");
        assert_eq!(sorter.result(0).unwrap().sort_key, "beta");
        assert_eq!(sorter.result(0).unwrap().query, "b");

        sorter.sort("al");
        assert_eq!(sorter.result(0).unwrap().sort_key, "alpha");
        assert_eq!(sorter.result(0).unwrap().query, "al");
        assert_eq!(sorter.results().len(), 2);
    }

    #[test]
    fn test_custom_weights_change_order() {
        // With the camel bonus, "fooBar" edges out the exact match
        let mut data = Probe::new(&["fb", "fooBar"]);
        let results = rank_default(&mut data, "fb");
        assert_eq!(data.items, vec!["fooBar", "fb"]);
        assert_eq!(results[0].score, 16.0);
        assert_eq!(results[1].score, 15.0);

        let weights = WeightConfig {
            camel_bonus: 0.0,
            ..WeightConfig::default()
        };
        let mut data = Probe::new(&["fb", "fooBar"]);
        rank(&mut data, "fb", &weights);
        assert_eq!(data.items, vec!["fb", "fooBar"]);
    }

    #[test]
    fn test_empty_collection() {
        let mut data = Probe::new(&[]);
        assert!(rank_default(&mut data, "x").is_empty());
    }

    #[test]
    fn test_compare_ranked_signed_zero_is_tie() {
        let results = vec![
            MatchResult::new(true, "", 0.0, "b"),
            MatchResult::new(true, "", -0.0, "a"),
        ];
        let data = Probe::new(&["b", "a"]);
        assert_eq!(compare_ranked(&results, &data, 0, 1), Ordering::Greater);
    }
}
