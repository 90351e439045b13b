//! Rental property records used for topic matching.

use geo::Coord;

/// A holiday-rental property with the tags used for topic matching.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// `distance_from_town` is travel time from the town focus point in minutes,
/// as curated by the property team; it is compared against a topic profile's
/// distance threshold, never recomputed from coordinates.
///
/// # Examples
/// ```
/// use coveside_core::Property;
///
/// let property = Property::new("allan-7", "7 Allan Drive", "7-allan-drive")
///     .with_location_tags(["waterfront", "town-adjacent"])
///     .with_distance_from_town(3.0)
///     .with_feature_tags(["luxury", "pet-friendly"])
///     .with_nearby_activities(["fishing", "kayaking"]);
///
/// assert_eq!(property.location_tags.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Location classification tags, e.g. `"waterfront"`, `"remote"`.
    pub location_tags: Vec<String>,
    /// Travel time from the town focus point, in minutes.
    pub distance_from_town: f64,
    /// Geospatial position, when surveyed.
    pub coordinates: Option<Coord<f64>>,
    /// Feature tags, e.g. `"luxury"`, `"pet-friendly"`.
    pub feature_tags: Vec<String>,
    /// Activities reachable from the property, e.g. `"fishing"`.
    pub nearby_activities: Vec<String>,
    /// Maximum number of guests.
    pub max_guests: u32,
    /// Number of bedrooms.
    pub bedrooms: u32,
}

impl Property {
    /// Construct a property with no tags and zero capacity.
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            location_tags: Vec::new(),
            distance_from_town: 0.0,
            coordinates: None,
            feature_tags: Vec::new(),
            nearby_activities: Vec::new(),
            max_guests: 0,
            bedrooms: 0,
        }
    }

    /// Replace the location tags while returning `self` for chaining.
    #[must_use]
    pub fn with_location_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.location_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the travel time from town while returning `self` for chaining.
    #[must_use]
    pub fn with_distance_from_town(mut self, minutes: f64) -> Self {
        self.distance_from_town = minutes;
        self
    }

    /// Set the coordinates while returning `self` for chaining.
    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Coord<f64>) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Replace the feature tags while returning `self` for chaining.
    #[must_use]
    pub fn with_feature_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the nearby activities while returning `self` for chaining.
    #[must_use]
    pub fn with_nearby_activities<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nearby_activities = activities.into_iter().map(Into::into).collect();
        self
    }

    /// Set guest and bedroom capacity while returning `self` for chaining.
    #[must_use]
    pub fn with_capacity(mut self, max_guests: u32, bedrooms: u32) -> Self {
        self.max_guests = max_guests;
        self.bedrooms = bedrooms;
        self
    }
}
