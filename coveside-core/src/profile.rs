//! Topic profiles: what a content topic looks for in a property.
//!
//! A profile is hand-authored configuration supplied by the calling layer,
//! typically one per blog topic, and never derived by the engine. The
//! slug-to-profile mapping lives in `coveside-data`; this type only carries
//! the target tags and the optional distance threshold.

use std::collections::BTreeSet;

/// Target tags and thresholds representing what a topic page cares about.
///
/// # Examples
/// ```
/// use coveside_core::TopicProfile;
///
/// let profile = TopicProfile::new()
///     .with_location_focus(["waterfront"])
///     .with_activity_tags(["fishing", "kayaking"])
///     .with_max_distance(5.0);
///
/// assert!(profile.location_focus.contains("waterfront"));
/// assert_eq!(profile.max_distance_from_focus, Some(5.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopicProfile {
    /// Location tags the topic is anchored to.
    pub location_focus: BTreeSet<String>,
    /// Activities the topic writes about.
    pub activity_tags: BTreeSet<String>,
    /// Property features the topic's readers value.
    pub ideal_features: BTreeSet<String>,
    /// Maximum acceptable travel time from the town focus point, in minutes.
    ///
    /// When set, every property is assessed against it: within the threshold
    /// earns a bonus, beyond it a penalty. When unset, distance plays no part.
    pub max_distance_from_focus: Option<f64>,
}

impl TopicProfile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the location focus while returning `self` for chaining.
    #[must_use]
    pub fn with_location_focus<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.location_focus = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the activity tags while returning `self` for chaining.
    #[must_use]
    pub fn with_activity_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activity_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the ideal features while returning `self` for chaining.
    #[must_use]
    pub fn with_ideal_features<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ideal_features = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the distance threshold while returning `self` for chaining.
    #[must_use]
    pub fn with_max_distance(mut self, minutes: f64) -> Self {
        self.max_distance_from_focus = Some(minutes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_has_no_threshold() {
        let profile = TopicProfile::new();
        assert!(profile.location_focus.is_empty());
        assert!(profile.max_distance_from_focus.is_none());
    }

    #[test]
    fn chaining_deduplicates_tags() {
        let profile = TopicProfile::new().with_activity_tags(["fishing", "fishing", "kayaking"]);
        assert_eq!(profile.activity_tags.len(), 2);
    }
}
