//! Single-pass fuzzy scorer.
//!
//! Walks the candidate once, keeping a cursor into the query. When a query
//! letter occurs several times in a row of plausible positions, the scorer
//! holds the best-scoring occurrence as "pending" and only commits it once
//! a later letter rules out a better alternative. O(len) time, O(1) space.

use crate::core::{MatchResult, WeightConfig};

/// Letter seen in the candidate that may still be replaced by a better
/// occurrence of the same letter.
#[derive(Debug, Clone, Copy)]
struct PendingLetter {
    lower: char,
    score: f64,
}

/// Scalar state carried from one candidate character to the next
#[derive(Debug)]
struct ScanState {
    query_idx: usize,
    score: f64,
    pending: Option<PendingLetter>,
    prev_matched: bool,
    prev_lower: bool,
    prev_separator: bool,
}

impl ScanState {
    fn new() -> Self {
        Self {
            query_idx: 0,
            score: 0.0,
            pending: None,
            prev_matched: false,
            prev_lower: false,
            // Start of string counts as following a separator
            prev_separator: true,
        }
    }

    fn pending_score(&self) -> f64 {
        self.pending.map_or(0.0, |p| p.score)
    }

    fn commit_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.score += pending.score;
        }
    }
}

/// Simple one-to-one lowercase mapping. Characters whose lowercase form
/// expands to several characters fold to themselves.
fn fold_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn fold_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn is_separator(c: char) -> bool {
    c == '_' || c == ' '
}

/// Scores `candidate` against `query`.
///
/// Matching is case-insensitive and works on Unicode scalar values, so a
/// multi-byte character counts as one position. The result's `matched` is
/// true iff every query character was found in order; the score is returned
/// either way.
///
/// # Examples
///
/// ```
/// use kissbot_fuzzy_sort::{score, WeightConfig};
///
/// let weights = WeightConfig::default();
/// let camel = score("GitHub", "gh", &weights);
/// let flat = score("github", "gh", &weights);
///
/// assert!(camel.matched && flat.matched);
/// assert!(camel.score > flat.score);
/// assert!(!score("abc", "ca", &weights).matched);
/// ```
pub fn score(candidate: &str, query: &str, weights: &WeightConfig) -> MatchResult {
    let query_chars: Vec<char> = query.chars().collect();
    let mut state = ScanState::new();

    for (pos, ch) in candidate.chars().enumerate() {
        let query_lower = query_chars.get(state.query_idx).copied().map(fold_lower);
        let ch_lower = fold_lower(ch);
        let ch_upper = fold_upper(ch);

        let next_match = query_lower == Some(ch_lower);
        let rematch = state.pending.is_some_and(|p| p.lower == ch_lower);
        let advanced = next_match && state.pending.is_some();
        let query_repeat = state
            .pending
            .is_some_and(|p| query_lower == Some(p.lower));

        if advanced || query_repeat {
            state.commit_pending();
        }

        if next_match || rematch {
            let mut new_score = 0.0;

            if state.query_idx == 0 {
                let mut penalty = pos as f64 * weights.leading_letter_penalty;
                if penalty <= weights.max_leading_letter_penalty {
                    penalty = weights.max_leading_letter_penalty;
                }
                state.score += penalty;
            }

            if state.prev_matched {
                new_score += weights.adjacency_bonus;
            }

            if state.prev_separator {
                new_score += weights.separator_bonus;
            }

            if state.prev_lower && ch == ch_upper && ch_lower != ch_upper {
                new_score += weights.camel_bonus;
            }

            if next_match {
                state.query_idx += 1;
            }

            if new_score >= state.pending_score() {
                // Discarding the previous candidate letter costs a miss
                if state.pending.is_some() {
                    state.score += weights.unmatched_letter_penalty;
                }
                state.pending = Some(PendingLetter {
                    lower: ch_lower,
                    score: new_score,
                });
            }

            state.prev_matched = true;
        } else {
            state.score += weights.unmatched_letter_penalty;
            state.prev_matched = false;
        }

        state.prev_lower = ch == ch_lower && ch_lower != ch_upper;
        state.prev_separator = is_separator(ch);
    }

    state.commit_pending();

    let matched = state.query_idx == query_chars.len();
    tracing::trace!(candidate, query, matched, score = state.score, "scored candidate");

    MatchResult::new(matched, query, state.score, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> WeightConfig {
        WeightConfig::default()
    }

    /// Only the leading-letter penalty is active
    fn leading_only() -> WeightConfig {
        WeightConfig {
            adjacency_bonus: 0.0,
            separator_bonus: 0.0,
            camel_bonus: 0.0,
            leading_letter_penalty: -3.0,
            max_leading_letter_penalty: -9.0,
            unmatched_letter_penalty: 0.0,
        }
    }

    #[test]
    fn test_empty_query_always_matches() {
        for s in ["", "a", "GitHub", "foo_bar baz", "Ünïcödé"] {
            let result = score(s, "", &defaults());
            assert!(result.matched, "{:?} should match empty query", s);
        }
        // Every scanned letter is unmatched
        assert_eq!(score("abc", "", &defaults()).score, -3.0);
        assert_eq!(score("", "", &defaults()).score, 0.0);
    }

    #[test]
    fn test_empty_candidate_never_matches() {
        let result = score("", "a", &defaults());
        assert!(!result.matched);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_query_longer_than_candidate() {
        assert!(!score("ab", "abc", &defaults()).matched);
    }

    #[test]
    fn test_order_sensitive() {
        assert!(score("abc", "ac", &defaults()).matched);
        assert!(!score("abc", "ca", &defaults()).matched);
    }

    #[test]
    fn test_case_insensitive() {
        assert!(score("ABC", "abc", &defaults()).matched);
        assert!(score("abc", "ABC", &defaults()).matched);
    }

    #[test]
    fn test_known_scores() {
        // g: separator bonus, i/t: unmatched, h: no bonus, u/b: unmatched
        assert_eq!(score("github", "gh", &defaults()).score, 6.0);
        // H additionally crosses a camel boundary
        assert_eq!(score("GitHub", "gh", &defaults()).score, 16.0);
        // a: separator, b/c: adjacency
        assert_eq!(score("abc", "abc", &defaults()).score, 20.0);
        assert_eq!(score("abc", "ac", &defaults()).score, 9.0);
    }

    #[test]
    fn test_separator_bonus() {
        let after_underscore = score("foo_bar", "b", &defaults());
        let mid_word = score("foobar", "b", &defaults());
        assert!(after_underscore.matched && mid_word.matched);
        assert!(after_underscore.score > mid_word.score);

        let after_space = score("foo bar", "b", &defaults());
        assert_eq!(after_space.score, after_underscore.score);
    }

    #[test]
    fn test_camel_bonus_needs_case_boundary() {
        let camel = score("GitHub", "gh", &defaults());
        let flat = score("github", "gh", &defaults());
        let upper = score("GITHUB", "gh", &defaults());
        assert!(camel.score > flat.score);
        // Previous letter is uppercase: no boundary
        assert_eq!(upper.score, flat.score);
    }

    #[test]
    fn test_leading_penalty_uses_char_positions() {
        // 'é' is two bytes but one position
        assert_eq!(score("éa", "a", &leading_only()).score, -3.0);
        assert_eq!(score("xa", "a", &leading_only()).score, -3.0);
    }

    #[test]
    fn test_leading_penalty_floor() {
        let mut previous = f64::INFINITY;
        for n in 0..8 {
            let candidate = format!("{}a", "x".repeat(n));
            let result = score(&candidate, "a", &leading_only());
            assert!(result.matched);
            assert!(result.score <= previous, "penalty grew at {}", n);
            assert!(result.score >= -9.0, "floor exceeded at {}", n);
            previous = result.score;
        }
        assert_eq!(score("xxxxxxa", "a", &leading_only()).score, -9.0);
    }

    #[test]
    fn test_leading_penalty_only_for_first_query_letter() {
        // Second letter sits far away but only the first is penalised
        let near = score("ab", "ab", &leading_only());
        let far = score("axxxxxxb", "ab", &leading_only());
        assert_eq!(near.score, 0.0);
        assert_eq!(far.score, 0.0);
    }

    #[test]
    fn test_exact_match_beats_subsequences() {
        let word = "hello";
        let exact = score(word, word, &defaults());
        assert!(exact.matched);
        assert_eq!(exact.score, 30.0);

        for sub in ["h", "he", "hlo", "ho", "ello", "llo", "o", "hell"] {
            let partial = score(word, sub, &defaults());
            assert!(partial.matched, "{} should match", sub);
            assert!(exact.score >= partial.score, "{} outscored exact", sub);
        }
    }

    #[test]
    fn test_unicode_matching() {
        let result = score("Ünïcödé", "üc", &defaults());
        assert!(result.matched);
        assert!(!score("Straße", "sse", &defaults()).matched);
        assert!(score("Straße", "ße", &defaults()).matched);
    }

    #[test]
    fn test_non_match_still_scored() {
        let result = score("bob", "a", &defaults());
        assert!(!result.matched);
        assert_eq!(result.score, -3.0);
    }

    #[test]
    fn test_result_carries_inputs() {
        let result = score("Documents", "do", &defaults());
        assert_eq!(result.sort_key, "Documents");
        assert_eq!(result.query, "do");
    }

    #[test]
    fn test_default_weights_deterministic() {
        let a = score("foo_barBaz", "fbb", &WeightConfig::default());
        let b = score("foo_barBaz", "fbb", &WeightConfig::new());
        assert_eq!(a, b);
    }

    #[test]
    fn test_fold_helpers() {
        assert_eq!(fold_lower('A'), 'a');
        assert_eq!(fold_upper('a'), 'A');
        // 'ß' uppercases to "SS": keeps itself
        assert_eq!(fold_upper('ß'), 'ß');
        assert_eq!(fold_lower('1'), '1');
    }
}
