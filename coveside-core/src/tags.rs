//! Tag extraction: normalise raw records into comparable attribute sets.
//!
//! Extraction is the single normalisation boundary for classification data.
//! Absent fields become empty sets, duplicate ids collapse, and every
//! downstream component receives only fully-normalised values. Each distinct
//! shared id therefore counts exactly once toward a per-match weight, even if
//! an upstream join delivered it twice.
//!
//! Extraction is total: it cannot fail and borrows from the source record
//! rather than copying tag strings.

use std::collections::BTreeSet;

use crate::{ContentItem, Property};

/// Normalised classification attributes of a blog post.
///
/// # Examples
/// ```
/// use coveside_core::{ContentItem, ContentTags};
///
/// let post = ContentItem::new("p-1", "Title", "title")
///     .with_audiences(["families", "families", "couples"]);
/// let tags = ContentTags::of(&post);
///
/// assert_eq!(tags.audiences.len(), 2);
/// assert!(tags.category.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTags<'a> {
    /// Category identifier, when classified.
    pub category: Option<&'a str>,
    /// Deduplicated audience ids.
    pub audiences: BTreeSet<&'a str>,
    /// Deduplicated season ids.
    pub seasons: BTreeSet<&'a str>,
}

impl<'a> ContentTags<'a> {
    /// Extract the comparable attribute sets of a post.
    #[must_use]
    pub fn of(item: &'a ContentItem) -> Self {
        Self {
            category: item.category_id.as_deref(),
            audiences: id_set(&item.audience_ids),
            seasons: id_set(&item.season_ids),
        }
    }
}

/// Normalised matching attributes of a rental property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTags<'a> {
    /// Deduplicated location tags.
    pub locations: BTreeSet<&'a str>,
    /// Deduplicated feature tags.
    pub features: BTreeSet<&'a str>,
    /// Deduplicated nearby activities.
    pub activities: BTreeSet<&'a str>,
    /// Travel time from the town focus point, in minutes.
    pub distance_from_town: f64,
}

impl<'a> PropertyTags<'a> {
    /// Extract the comparable attribute sets of a property.
    #[must_use]
    pub fn of(property: &'a Property) -> Self {
        Self {
            locations: id_set(&property.location_tags),
            features: id_set(&property.feature_tags),
            activities: id_set(&property.nearby_activities),
            distance_from_town: property.distance_from_town,
        }
    }
}

fn id_set(ids: &[String]) -> BTreeSet<&str> {
    ids.iter().map(String::as_str).collect()
}
