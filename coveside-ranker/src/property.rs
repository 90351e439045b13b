//! Topic-profile-to-property matching.
//!
//! Properties are scored against a hand-authored [`TopicProfile`]: any
//! overlap with the profile's location focus earns a flat bonus, a distance
//! threshold (when present) is always assessed as bonus or penalty, and
//! activity and feature overlaps score per distinct match. Totals may go
//! negative; unlike related-content ranking, no minimum-score filter is
//! applied: the portfolio is small and curated, and callers only take the
//! top few results.

use coveside_core::{
    ContentStore, Property, PropertyTags, RankOptions, Score, Scored, Scorer, TopicProfile,
    rank_scored,
};
use serde::Serialize;

use crate::{WeightsError, per_match};

/// Weight table for property matching.
///
/// Defaults match the production scoring: location focus 30 (flat),
/// distance 20 (bonus or penalty), activity 10 per match, feature 5 per
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyWeights {
    /// Awarded once when any property location tag overlaps the profile's
    /// location focus.
    pub location_focus: Score,
    /// Added when the property sits within the profile's distance
    /// threshold, subtracted when it sits beyond it.
    pub distance: Score,
    /// Awarded per distinct nearby activity found in the profile.
    pub activity: Score,
    /// Awarded per distinct feature tag found in the profile.
    pub feature: Score,
}

impl Default for PropertyWeights {
    fn default() -> Self {
        Self {
            location_focus: 30,
            distance: 20,
            activity: 10,
            feature: 5,
        }
    }
}

impl PropertyWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when any weight is non-positive or the
    /// location/distance/activity/feature tiering is not strictly
    /// descending.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if self.location_focus <= 0 || self.distance <= 0 || self.activity <= 0 || self.feature <= 0
        {
            return Err(WeightsError::NonPositive);
        }
        if self.location_focus <= self.distance
            || self.distance <= self.activity
            || self.activity <= self.feature
        {
            return Err(WeightsError::TieringViolated);
        }
        Ok(self)
    }
}

/// Scorer matching properties to a topic profile.
///
/// # Examples
/// ```
/// use coveside_core::{Property, Scorer, TopicProfile};
/// use coveside_ranker::PropertyMatchScorer;
///
/// let profile = TopicProfile::new()
///     .with_location_focus(["waterfront"])
///     .with_activity_tags(["fishing"])
///     .with_ideal_features(["luxury"])
///     .with_max_distance(5.0);
/// let property = Property::new("p", "P", "p")
///     .with_location_tags(["waterfront"])
///     .with_distance_from_town(3.0)
///     .with_nearby_activities(["fishing", "kayaking"])
///     .with_feature_tags(["luxury", "modern"]);
///
/// let scorer = PropertyMatchScorer::default();
/// assert_eq!(scorer.score(&profile, &property), 65);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyMatchScorer {
    weights: PropertyWeights,
}

impl PropertyMatchScorer {
    /// Construct a scorer from a custom weight table.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the table fails validation.
    pub fn new(weights: PropertyWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Return the weight table in use.
    #[must_use]
    pub fn weights(&self) -> PropertyWeights {
        self.weights
    }

    /// Score a property's normalised tags against a profile.
    #[must_use]
    pub fn score_tags(&self, profile: &TopicProfile, tags: &PropertyTags<'_>) -> Score {
        let mut score: Score = 0;
        // Flat bonus: one overlapping location tag scores the same as many.
        if tags
            .locations
            .iter()
            .any(|tag| profile.location_focus.contains(*tag))
        {
            score = score.saturating_add(self.weights.location_focus);
        }
        if let Some(max_minutes) = profile.max_distance_from_focus {
            if tags.distance_from_town <= max_minutes {
                score = score.saturating_add(self.weights.distance);
            } else {
                score = score.saturating_sub(self.weights.distance);
            }
        }
        let activities = tags
            .activities
            .iter()
            .filter(|id| profile.activity_tags.contains(**id))
            .count();
        score = score.saturating_add(per_match(activities, self.weights.activity));
        let features = tags
            .features
            .iter()
            .filter(|id| profile.ideal_features.contains(**id))
            .count();
        score.saturating_add(per_match(features, self.weights.feature))
    }

    /// Explain a property's score against a profile.
    #[must_use]
    pub fn breakdown(&self, profile: &TopicProfile, property: &Property) -> PropertyBreakdown {
        let tags = PropertyTags::of(property);
        let matched_locations = matched(&tags.locations, &profile.location_focus);
        let distance = match profile.max_distance_from_focus {
            None => DistanceVerdict::NotAssessed,
            Some(max_minutes) if tags.distance_from_town <= max_minutes => {
                DistanceVerdict::WithinFocus {
                    minutes: tags.distance_from_town,
                    max_minutes,
                }
            }
            Some(max_minutes) => DistanceVerdict::BeyondFocus {
                minutes: tags.distance_from_town,
                max_minutes,
            },
        };
        let matched_activities = matched(&tags.activities, &profile.activity_tags);
        let matched_features = matched(&tags.features, &profile.ideal_features);
        let total = self.score_tags(profile, &tags);
        PropertyBreakdown {
            matched_locations,
            distance,
            matched_activities,
            matched_features,
            total,
        }
    }
}

impl Scorer<TopicProfile, Property> for PropertyMatchScorer {
    fn score(&self, reference: &TopicProfile, candidate: &Property) -> Score {
        self.score_tags(reference, &PropertyTags::of(candidate))
    }
}

/// Outcome of the distance assessment for one property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "kebab-case")]
pub enum DistanceVerdict {
    /// The profile sets no distance threshold.
    NotAssessed,
    /// The property sits within the profile's threshold.
    WithinFocus {
        /// The property's travel time from town, in minutes.
        minutes: f64,
        /// The profile's threshold, in minutes.
        max_minutes: f64,
    },
    /// The property sits beyond the profile's threshold.
    BeyondFocus {
        /// The property's travel time from town, in minutes.
        minutes: f64,
        /// The profile's threshold, in minutes.
        max_minutes: f64,
    },
}

/// The matched attributes behind one property-match score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyBreakdown {
    /// Location tags overlapping the profile's focus. The bonus is flat:
    /// the list length does not change the score.
    pub matched_locations: Vec<String>,
    /// The distance assessment.
    pub distance: DistanceVerdict,
    /// Nearby activities found in the profile.
    pub matched_activities: Vec<String>,
    /// Feature tags found in the profile.
    pub matched_features: Vec<String>,
    /// The resulting score; always equals the plain scorer output.
    pub total: Score,
}

fn matched(
    tags: &std::collections::BTreeSet<&str>,
    wanted: &std::collections::BTreeSet<String>,
) -> Vec<String> {
    tags.iter()
        .filter(|tag| wanted.contains(**tag))
        .map(|tag| (*tag).to_owned())
        .collect()
}

/// Rank a property pool for a topic profile using the default weights.
///
/// Every property is ranked; there is no minimum-score filter, so even
/// negative totals appear when the limit allows. Ties keep pool order.
///
/// # Examples
/// ```
/// use coveside_core::{Property, TopicProfile};
/// use coveside_ranker::rank_properties_for_profile;
///
/// let profile = TopicProfile::new().with_location_focus(["waterfront"]);
/// let pool = vec![
///     Property::new("a", "A", "a").with_location_tags(["remote"]),
///     Property::new("b", "B", "b").with_location_tags(["waterfront"]),
/// ];
///
/// let ranked = rank_properties_for_profile(&profile, &pool, 3);
/// assert_eq!(ranked[0].item.id, "b");
/// assert_eq!(ranked.len(), 2);
/// ```
#[must_use]
pub fn rank_properties_for_profile<'p>(
    profile: &TopicProfile,
    pool: &'p [Property],
    limit: usize,
) -> Vec<Scored<&'p Property>> {
    rank_properties_with(&PropertyMatchScorer::default(), profile, pool, limit)
}

/// Rank a property pool with a custom scorer.
#[must_use]
pub fn rank_properties_with<'p>(
    scorer: &PropertyMatchScorer,
    profile: &TopicProfile,
    pool: &'p [Property],
    limit: usize,
) -> Vec<Scored<&'p Property>> {
    let options = RankOptions::new().without_min_score().with_limit(limit);
    let scored = pool
        .iter()
        .map(|property| Scored::new(property, scorer.score(profile, property)))
        .collect();
    rank_scored(scored, &options)
}

/// Rank a store's property portfolio for a topic profile.
///
/// Returns owned results so callers need not keep the pool alive.
#[must_use]
pub fn rank_properties_in<S>(
    store: &S,
    profile: &TopicProfile,
    limit: usize,
) -> Vec<Scored<Property>>
where
    S: ContentStore + ?Sized,
{
    let pool: Vec<Property> = store.properties().collect();
    let ranked = rank_properties_for_profile(profile, &pool, limit);
    log::debug!(
        "ranked {} of {} properties for the topic profile",
        ranked.len(),
        pool.len(),
    );
    ranked
        .into_iter()
        .map(|entry| entry.map(Clone::clone))
        .collect()
}
