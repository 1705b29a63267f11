use std::borrow::Cow;
use std::cmp::Ordering;

use crate::core::{MatchResult, WeightConfig};
use crate::ranking::{rank, Sortable};

/// Sortable view over a slice of strings. The string is its own sort key
/// and ties fall back to plain string order.
pub struct StringSlice<'a, T>(pub &'a mut [T]);

impl<T: AsRef<str> + Ord> Sortable for StringSlice<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn compare(&self, i: usize, j: usize) -> Ordering {
        self.0[i].cmp(&self.0[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    fn sort_key(&self, i: usize) -> Cow<'_, str> {
        Cow::Borrowed(self.0[i].as_ref())
    }
}

/// Fuzzy-sorts `data` in place against `query` with the default weights.
///
/// ```
/// use kissbot_fuzzy_sort::sort_strings;
///
/// let mut dirs = vec!["Music", "Documents", "Pictures"];
/// let results = sort_strings(&mut dirs, "doc");
///
/// assert_eq!(dirs[0], "Documents");
/// assert!(results[0].matched);
/// assert!(!results[1].matched);
/// ```
pub fn sort_strings<T: AsRef<str> + Ord>(data: &mut [T], query: &str) -> Vec<MatchResult> {
    sort_strings_with(data, query, &WeightConfig::default())
}

/// [`sort_strings`] with explicit weights
pub fn sort_strings_with<T: AsRef<str> + Ord>(
    data: &mut [T],
    query: &str,
    weights: &WeightConfig,
) -> Vec<MatchResult> {
    rank(&mut StringSlice(data), query, weights)
}
