//! Facade crate for the Coveside content-relevance engine.
//!
//! This crate re-exports the core domain types and the concrete rankers so
//! applications can depend on a single crate. Catalogue loading lives in
//! `coveside-data`; the `coveside` binary in `coveside-cli` exercises the
//! whole stack offline.

#![forbid(unsafe_code)]

pub use coveside_core::{
    ContentItem, ContentStore, ContentTags, Property, PropertyTags, RankOptions, Score, Scored,
    Scorer, TopicProfile, TravelEstimate, rank_candidates, rank_scored,
};

pub use coveside_ranker::{
    DistanceVerdict, PropertyBreakdown, PropertyMatchScorer, PropertyWeights, RelatedBreakdown,
    RelatedContentScorer, RelatedWeights, WeightsError, rank_properties_for_profile,
    rank_properties_in, rank_properties_with, rank_related, rank_related_by_id, rank_related_in,
    rank_related_with,
};
