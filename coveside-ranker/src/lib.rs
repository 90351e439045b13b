//! Relevance ranking for Coveside content.
//!
//! The crate provides the two concrete rankers of the engine:
//! - **Related content** pairs a reference blog post with the rest of the
//!   published pool, scoring shared category, audiences, and seasons
//!   (weights 3/2/1) and dropping candidates below a minimum score.
//! - **Property matching** ranks the rental portfolio against a
//!   hand-authored [`TopicProfile`](coveside_core::TopicProfile), scoring
//!   location focus, a distance threshold, activities, and features
//!   (weights 30/20/10/5) with no minimum-score filter.
//!
//! Both build on the `Scorer` trait and ranking pipeline from
//! `coveside-core` and expose breakdown types that explain a score for UI
//! transparency.
//!
//! # Examples
//!
//! ```
//! use coveside_core::{ContentItem, RankOptions};
//! use coveside_ranker::rank_related;
//!
//! let reference = ContentItem::new("r", "Reference", "r").with_category("nature");
//! let pool = vec![
//!     reference.clone(),
//!     ContentItem::new("a", "A", "a").with_category("nature"),
//! ];
//! let ranked = rank_related(&reference, &pool, &RankOptions::default());
//! assert_eq!(ranked[0].score, 3);
//! ```

#![forbid(unsafe_code)]

use coveside_core::Score;

mod error;
mod property;
mod related;

pub use error::WeightsError;
pub use property::{
    DistanceVerdict, PropertyBreakdown, PropertyMatchScorer, PropertyWeights,
    rank_properties_for_profile, rank_properties_in, rank_properties_with,
};
pub use related::{
    RelatedBreakdown, RelatedContentScorer, RelatedWeights, rank_related, rank_related_by_id,
    rank_related_in, rank_related_with,
};

/// Convert a match count into its weighted contribution, saturating on the
/// (unrealistic) overflow paths rather than wrapping.
pub(crate) fn per_match(count: usize, weight: Score) -> Score {
    Score::try_from(count)
        .unwrap_or(Score::MAX)
        .saturating_mul(weight)
}
