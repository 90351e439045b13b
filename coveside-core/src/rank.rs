//! Rank scored candidates: filter, order, truncate.
//!
//! The pipeline is deterministic and stateless. Sorting is descending by
//! score and **stable**: candidates with equal scores keep the relative
//! order of the input pool. Upstream stores supply posts most-recent-first,
//! so ties resolve newest-first without the ranker ever reading a date.

use crate::{Score, Scored, Scorer};

/// Filtering and truncation options for a ranking call.
///
/// `min_score` is inclusive: a candidate is kept when `score >= min_score`.
/// `None` disables filtering entirely, which the property-matching variant
/// relies on to rank even negative-scored candidates.
///
/// # Examples
/// ```
/// use coveside_core::RankOptions;
///
/// let options = RankOptions::default();
/// assert_eq!(options.min_score, Some(1));
/// assert_eq!(options.limit, 5);
///
/// let open = RankOptions::new().without_min_score().with_limit(3);
/// assert_eq!(open.min_score, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Minimum score a candidate must reach to appear in the output.
    pub min_score: Option<Score>,
    /// Maximum number of results returned. `0` always yields an empty list.
    pub limit: usize,
}

impl RankOptions {
    /// Default minimum score: candidates must score at least one point.
    pub const DEFAULT_MIN_SCORE: Score = 1;
    /// Default result count.
    pub const DEFAULT_LIMIT: usize = 5;

    /// Construct the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum score while returning `self` for chaining.
    #[must_use]
    pub fn with_min_score(mut self, min_score: Score) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Disable score filtering while returning `self` for chaining.
    #[must_use]
    pub fn without_min_score(mut self) -> Self {
        self.min_score = None;
        self
    }

    /// Set the result limit while returning `self` for chaining.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_score: Some(Self::DEFAULT_MIN_SCORE),
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Filter, sort, and truncate already-scored candidates.
///
/// The sort is stable, so equal scores preserve the input order.
///
/// # Examples
/// ```
/// use coveside_core::{RankOptions, Scored, rank_scored};
///
/// let scored = vec![Scored::new("b", 2), Scored::new("a", 6), Scored::new("c", 0)];
/// let ranked = rank_scored(scored, &RankOptions::default());
///
/// let order: Vec<_> = ranked.iter().map(|entry| entry.item).collect();
/// assert_eq!(order, vec!["a", "b"]);
/// ```
#[must_use]
pub fn rank_scored<T>(mut scored: Vec<Scored<T>>, options: &RankOptions) -> Vec<Scored<T>> {
    if let Some(min_score) = options.min_score {
        scored.retain(|entry| entry.score >= min_score);
    }
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(options.limit);
    scored
}

/// Score every candidate in `pool` against `reference`, then rank.
///
/// The pool is taken as-is: excluding the reference item itself is the
/// caller's responsibility, since only the caller knows candidate identity.
///
/// # Examples
/// ```
/// use coveside_core::{ContentItem, RankOptions, Score, Scorer, rank_candidates};
///
/// struct TitleLengthScorer;
///
/// impl Scorer<ContentItem, ContentItem> for TitleLengthScorer {
///     fn score(&self, _reference: &ContentItem, candidate: &ContentItem) -> Score {
///         Score::try_from(candidate.title.len()).unwrap_or(Score::MAX)
///     }
/// }
///
/// let reference = ContentItem::new("r", "Reference", "r");
/// let pool = vec![
///     ContentItem::new("a", "Short", "a"),
///     ContentItem::new("b", "Considerably longer", "b"),
/// ];
/// let ranked = rank_candidates(&reference, &pool, &TitleLengthScorer, &RankOptions::default());
/// assert_eq!(ranked.first().map(|entry| entry.item.id.as_str()), Some("b"));
/// ```
#[must_use]
pub fn rank_candidates<'p, R, C, S>(
    reference: &R,
    pool: &'p [C],
    scorer: &S,
    options: &RankOptions,
) -> Vec<Scored<&'p C>>
where
    S: Scorer<R, C> + ?Sized,
{
    let scored = pool
        .iter()
        .map(|candidate| Scored::new(candidate, scorer.score(reference, candidate)))
        .collect();
    rank_scored(scored, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pool() -> Vec<Scored<&'static str>> {
        vec![
            Scored::new("first", 2),
            Scored::new("second", 6),
            Scored::new("third", 2),
            Scored::new("fourth", 0),
        ]
    }

    #[rstest]
    fn sorts_descending_and_filters() {
        let ranked = rank_scored(pool(), &RankOptions::default());
        let order: Vec<_> = ranked.iter().map(|entry| entry.item).collect();
        assert_eq!(order, vec!["second", "first", "third"]);
    }

    #[rstest]
    fn ties_preserve_input_order() {
        let ranked = rank_scored(pool(), &RankOptions::new().without_min_score());
        let order: Vec<_> = ranked.iter().map(|entry| entry.item).collect();
        assert_eq!(order, vec!["second", "first", "third", "fourth"]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 2)]
    #[case(10, 4)]
    fn truncates_to_limit(#[case] limit: usize, #[case] expected: usize) {
        let options = RankOptions::new().without_min_score().with_limit(limit);
        assert_eq!(rank_scored(pool(), &options).len(), expected);
    }

    #[rstest]
    fn zero_scores_survive_when_threshold_is_zero() {
        let options = RankOptions::new().with_min_score(0);
        let ranked = rank_scored(pool(), &options);
        assert!(ranked.iter().any(|entry| entry.item == "fourth"));
    }

    #[rstest]
    fn empty_pool_yields_empty_output() {
        let ranked = rank_scored(Vec::<Scored<&str>>::new(), &RankOptions::default());
        assert!(ranked.is_empty());
    }
}
