//! Blog-to-blog relevance scoring and ranking.
//!
//! A candidate post is scored against a reference post by comparing their
//! normalised classification sets: sharing the category is the strongest
//! signal, each shared audience a medium one, each shared season the
//! weakest. Scores are plain weighted sums with no normalisation, so a post
//! sharing the category, two audiences, and one season scores exactly
//! `3 + 2*2 + 1 = 8` under the default weights.

use coveside_core::{
    ContentItem, ContentStore, ContentTags, RankOptions, Score, Scored, Scorer, rank_scored,
};
use serde::Serialize;

use crate::{WeightsError, per_match};

/// Weight table for blog-to-blog relevance.
///
/// The defaults match the production scoring: category 3, audience 2,
/// season 1. [`validate`](Self::validate) enforces the tiering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedWeights {
    /// Awarded once when both posts carry the same category.
    pub category: Score,
    /// Awarded per distinct shared audience id.
    pub audience: Score,
    /// Awarded per distinct shared season id.
    pub season: Score,
}

impl Default for RelatedWeights {
    fn default() -> Self {
        Self {
            category: 3,
            audience: 2,
            season: 1,
        }
    }
}

impl RelatedWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when any weight is non-positive or the
    /// category/audience/season tiering is not strictly descending.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if self.category <= 0 || self.audience <= 0 || self.season <= 0 {
            return Err(WeightsError::NonPositive);
        }
        if self.category <= self.audience || self.audience <= self.season {
            return Err(WeightsError::TieringViolated);
        }
        Ok(self)
    }
}

/// Scorer for related blog content.
///
/// # Examples
/// ```
/// use coveside_core::{ContentItem, Scorer};
/// use coveside_ranker::RelatedContentScorer;
///
/// let reference = ContentItem::new("r", "R", "r")
///     .with_category("nature")
///     .with_audiences(["families"]);
/// let candidate = ContentItem::new("c", "C", "c")
///     .with_category("nature")
///     .with_audiences(["families", "couples"]);
///
/// let scorer = RelatedContentScorer::default();
/// assert_eq!(scorer.score(&reference, &candidate), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RelatedContentScorer {
    weights: RelatedWeights,
}

impl RelatedContentScorer {
    /// Construct a scorer from a custom weight table.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the table fails validation.
    pub fn new(weights: RelatedWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Return the weight table in use.
    #[must_use]
    pub fn weights(&self) -> RelatedWeights {
        self.weights
    }

    /// Score a candidate's normalised tags against a reference's.
    ///
    /// Extraction is the caller's job so a reference can be extracted once
    /// and scored against a whole pool.
    #[must_use]
    pub fn score_tags(&self, reference: &ContentTags<'_>, candidate: &ContentTags<'_>) -> Score {
        let mut score: Score = 0;
        if let (Some(ours), Some(theirs)) = (reference.category, candidate.category)
            && ours == theirs
        {
            score = score.saturating_add(self.weights.category);
        }
        let shared_audiences = reference
            .audiences
            .intersection(&candidate.audiences)
            .count();
        score = score.saturating_add(per_match(shared_audiences, self.weights.audience));
        let shared_seasons = reference.seasons.intersection(&candidate.seasons).count();
        score.saturating_add(per_match(shared_seasons, self.weights.season))
    }

    /// Explain a candidate's score: the matched category and the shared
    /// audience and season ids, with the resulting total.
    #[must_use]
    pub fn breakdown(&self, reference: &ContentItem, candidate: &ContentItem) -> RelatedBreakdown {
        let reference_tags = ContentTags::of(reference);
        let candidate_tags = ContentTags::of(candidate);
        let category_matched = match (reference_tags.category, candidate_tags.category) {
            (Some(ours), Some(theirs)) if ours == theirs => Some(ours.to_owned()),
            _ => None,
        };
        let shared_audiences = shared_ids(&reference_tags.audiences, &candidate_tags.audiences);
        let shared_seasons = shared_ids(&reference_tags.seasons, &candidate_tags.seasons);
        let total = self.score_tags(&reference_tags, &candidate_tags);
        RelatedBreakdown {
            category_matched,
            shared_audiences,
            shared_seasons,
            total,
        }
    }
}

impl Scorer<ContentItem, ContentItem> for RelatedContentScorer {
    fn score(&self, reference: &ContentItem, candidate: &ContentItem) -> Score {
        self.score_tags(&ContentTags::of(reference), &ContentTags::of(candidate))
    }
}

/// The matched attributes behind one related-content score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedBreakdown {
    /// The shared category, when both posts carry the same one.
    pub category_matched: Option<String>,
    /// Audience ids present on both posts.
    pub shared_audiences: Vec<String>,
    /// Season ids present on both posts.
    pub shared_seasons: Vec<String>,
    /// The resulting score; always equals the plain scorer output.
    pub total: Score,
}

fn shared_ids(
    ours: &std::collections::BTreeSet<&str>,
    theirs: &std::collections::BTreeSet<&str>,
) -> Vec<String> {
    ours.intersection(theirs).map(|id| (*id).to_owned()).collect()
}

/// Rank the posts related to `reference` using the default weights.
///
/// The reference is excluded from the pool by id; candidates scoring below
/// `options.min_score` (default 1) are dropped; ties keep pool order.
///
/// # Examples
/// ```
/// use coveside_core::{ContentItem, RankOptions};
/// use coveside_ranker::rank_related;
///
/// let reference = ContentItem::new("r", "R", "r").with_category("nature");
/// let pool = vec![
///     reference.clone(),
///     ContentItem::new("a", "A", "a").with_category("nature"),
///     ContentItem::new("b", "B", "b").with_category("dining"),
/// ];
///
/// let ranked = rank_related(&reference, &pool, &RankOptions::default());
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].item.id, "a");
/// ```
#[must_use]
pub fn rank_related<'p>(
    reference: &ContentItem,
    pool: &'p [ContentItem],
    options: &RankOptions,
) -> Vec<Scored<&'p ContentItem>> {
    rank_related_with(&RelatedContentScorer::default(), reference, pool, options)
}

/// Rank related posts with a custom scorer.
#[must_use]
pub fn rank_related_with<'p>(
    scorer: &RelatedContentScorer,
    reference: &ContentItem,
    pool: &'p [ContentItem],
    options: &RankOptions,
) -> Vec<Scored<&'p ContentItem>> {
    let reference_tags = ContentTags::of(reference);
    let scored = pool
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .map(|candidate| {
            Scored::new(
                candidate,
                scorer.score_tags(&reference_tags, &ContentTags::of(candidate)),
            )
        })
        .collect();
    rank_scored(scored, options)
}

/// Resolve the reference from the pool by id, then rank its related posts.
///
/// An id absent from the pool is not an error: there is nothing to relate,
/// so the result is empty.
#[must_use]
pub fn rank_related_by_id<'p>(
    reference_id: &str,
    pool: &'p [ContentItem],
    options: &RankOptions,
) -> Vec<Scored<&'p ContentItem>> {
    pool.iter()
        .find(|item| item.id == reference_id)
        .map_or_else(Vec::new, |reference| rank_related(reference, pool, options))
}

/// Rank related posts for a reference id against a store's published pool.
///
/// Returns owned results so callers need not keep the pool alive.
#[must_use]
pub fn rank_related_in<S>(
    store: &S,
    reference_id: &str,
    options: &RankOptions,
) -> Vec<Scored<ContentItem>>
where
    S: ContentStore + ?Sized,
{
    let pool: Vec<ContentItem> = store.published_posts().collect();
    let ranked = rank_related_by_id(reference_id, &pool, options);
    log::debug!(
        "ranked {} of {} candidate posts for {reference_id}",
        ranked.len(),
        pool.len().saturating_sub(1),
    );
    ranked
        .into_iter()
        .map(|entry| entry.map(Clone::clone))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coveside_core::test_support::MemoryCatalogue;
    use rstest::{fixture, rstest};

    #[fixture]
    fn reference() -> ContentItem {
        ContentItem::new("ref", "Reference", "reference")
            .with_category("nature")
            .with_audiences(["families"])
            .with_seasons(["summer", "winter"])
    }

    fn pool(reference: &ContentItem) -> Vec<ContentItem> {
        vec![
            reference.clone(),
            ContentItem::new("a", "A", "a")
                .with_category("nature")
                .with_audiences(["families", "couples"])
                .with_seasons(["summer"]),
            ContentItem::new("b", "B", "b")
                .with_category("dining")
                .with_seasons(["summer", "winter"]),
            ContentItem::new("c", "C", "c").with_category("nature"),
        ]
    }

    #[rstest]
    fn weighted_components_are_additive(reference: ContentItem) {
        let candidate = ContentItem::new("x", "X", "x")
            .with_category("nature")
            .with_audiences(["families", "retirees"])
            .with_seasons(["winter"]);
        // Shares the category, one audience, and one season.
        let scorer = RelatedContentScorer::default();
        assert_eq!(scorer.score(&reference, &candidate), 3 + 2 + 1);

        let richer = ContentItem::new("y", "Y", "y")
            .with_category("nature")
            .with_audiences(["families", "couples"])
            .with_seasons(["summer"]);
        let wider_reference = reference.with_audiences(["families", "couples"]);
        assert_eq!(scorer.score(&wider_reference, &richer), 3 + 2 * 2 + 1);
    }

    #[rstest]
    fn ranks_the_documented_scenario(reference: ContentItem) {
        let pool = pool(&reference);
        let ranked = rank_related(&reference, &pool, &RankOptions::default().with_limit(3));

        let summary: Vec<(&str, Score)> = ranked
            .iter()
            .map(|entry| (entry.item.id.as_str(), entry.score))
            .collect();
        assert_eq!(summary, vec![("a", 6), ("c", 3), ("b", 2)]);
    }

    #[rstest]
    fn reference_never_appears_in_its_own_results(reference: ContentItem) {
        let pool = pool(&reference);
        let ranked = rank_related(&reference, &pool, &RankOptions::new().without_min_score());
        assert!(ranked.iter().all(|entry| entry.item.id != reference.id));
    }

    #[rstest]
    fn score_zero_is_excluded_by_default_but_kept_at_zero_threshold(reference: ContentItem) {
        let unrelated = ContentItem::new("z", "Z", "z").with_category("history");
        let pool = vec![reference.clone(), unrelated];

        assert!(rank_related(&reference, &pool, &RankOptions::default()).is_empty());

        let ranked = rank_related(&reference, &pool, &RankOptions::new().with_min_score(0));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0);
    }

    #[rstest]
    fn missing_reference_id_yields_empty(reference: ContentItem) {
        let pool = pool(&reference);
        let ranked = rank_related_by_id("absent", &pool, &RankOptions::default());
        assert!(ranked.is_empty());
    }

    #[rstest]
    fn duplicate_audience_ids_count_once(reference: ContentItem) {
        let candidate = ContentItem::new("d", "D", "d").with_audiences(["families", "families"]);
        let scorer = RelatedContentScorer::default();
        assert_eq!(scorer.score(&reference, &candidate), 2);
    }

    #[rstest]
    fn breakdown_total_matches_score(reference: ContentItem) {
        let pool = pool(&reference);
        let scorer = RelatedContentScorer::default();
        for candidate in &pool[1..] {
            let breakdown = scorer.breakdown(&reference, candidate);
            assert_eq!(breakdown.total, scorer.score(&reference, candidate));
        }
    }

    #[rstest]
    fn breakdown_lists_matched_attributes(reference: ContentItem) {
        let candidate = ContentItem::new("a", "A", "a")
            .with_category("nature")
            .with_audiences(["families", "couples"])
            .with_seasons(["summer"]);
        let breakdown = RelatedContentScorer::default().breakdown(&reference, &candidate);

        assert_eq!(breakdown.category_matched.as_deref(), Some("nature"));
        assert_eq!(breakdown.shared_audiences, vec!["families"]);
        assert_eq!(breakdown.shared_seasons, vec!["summer"]);
        assert_eq!(breakdown.total, 6);
    }

    #[rstest]
    fn breakdown_serialises_for_transparency(reference: ContentItem) {
        let candidate = ContentItem::new("a", "A", "a")
            .with_category("nature")
            .with_seasons(["summer"]);
        let breakdown = RelatedContentScorer::default().breakdown(&reference, &candidate);
        let value = serde_json::to_value(&breakdown).expect("serialise breakdown");

        assert_eq!(value["category_matched"], "nature");
        assert_eq!(value["total"], 4);
    }

    #[rstest]
    #[case(RelatedWeights { category: 0, audience: 2, season: 1 }, WeightsError::NonPositive)]
    #[case(RelatedWeights { category: 2, audience: 2, season: 1 }, WeightsError::TieringViolated)]
    #[case(RelatedWeights { category: 3, audience: 1, season: 2 }, WeightsError::TieringViolated)]
    fn invalid_weights_are_rejected(
        #[case] weights: RelatedWeights,
        #[case] expected: WeightsError,
    ) {
        let err = RelatedContentScorer::new(weights).expect_err("weights should be rejected");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn store_ranking_returns_owned_results(reference: ContentItem) {
        let store = MemoryCatalogue::with_posts(pool(&reference));
        let ranked = rank_related_in(&store, "ref", &RankOptions::default());
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].item.id, "a");
    }
}
