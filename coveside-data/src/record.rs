//! Raw catalogue records as they appear on disk.
//!
//! These DTOs are the single normalisation boundary between the catalogue
//! files and the domain types: classification arrays default to empty when
//! a field is absent, so downstream code never sees a missing collection.
//! Conversion into the core types is total.

use std::collections::BTreeMap;

use coveside_core::{ContentItem, Property, TopicProfile};
use geo::Coord;
use serde::Deserialize;

/// One blog post as stored in `posts.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Teaser text, if any.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// ISO-8601 publication date; absent for drafts.
    #[serde(default)]
    pub published_date: Option<String>,
    /// Category identifier, if classified.
    #[serde(default)]
    pub category_id: Option<String>,
    /// Audience classification ids.
    #[serde(default)]
    pub audience_ids: Vec<String>,
    /// Season classification ids.
    #[serde(default)]
    pub season_ids: Vec<String>,
}

impl From<PostRecord> for ContentItem {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            slug: record.slug,
            excerpt: record.excerpt,
            published: record.published_date,
            category_id: record.category_id,
            audience_ids: record.audience_ids,
            season_ids: record.season_ids,
        }
    }
}

/// WGS84 coordinates as stored in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoordRecord {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl From<CoordRecord> for Coord<f64> {
    fn from(record: CoordRecord) -> Self {
        Self {
            x: record.lng,
            y: record.lat,
        }
    }
}

/// One rental property as stored in `properties.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyRecord {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Location classification tags.
    #[serde(default)]
    pub location_tags: Vec<String>,
    /// Travel time from the town focus point, in minutes.
    pub distance_from_town: f64,
    /// Surveyed coordinates, when available.
    #[serde(default)]
    pub coordinates: Option<CoordRecord>,
    /// Feature tags.
    #[serde(default)]
    pub feature_tags: Vec<String>,
    /// Activities reachable from the property.
    #[serde(default)]
    pub nearby_activities: Vec<String>,
    /// Maximum number of guests.
    #[serde(default)]
    pub max_guests: u32,
    /// Number of bedrooms.
    #[serde(default)]
    pub bedrooms: u32,
}

impl From<PropertyRecord> for Property {
    fn from(record: PropertyRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            slug: record.slug,
            location_tags: record.location_tags,
            distance_from_town: record.distance_from_town,
            coordinates: record.coordinates.map(Into::into),
            feature_tags: record.feature_tags,
            nearby_activities: record.nearby_activities,
            max_guests: record.max_guests,
            bedrooms: record.bedrooms,
        }
    }
}

/// One topic profile as stored in `profiles.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRecord {
    /// Location tags the topic is anchored to.
    #[serde(default)]
    pub location_focus: Vec<String>,
    /// Activities the topic writes about.
    #[serde(default)]
    pub activity_tags: Vec<String>,
    /// Property features the topic's readers value.
    #[serde(default)]
    pub ideal_features: Vec<String>,
    /// Maximum acceptable travel time from town, in minutes.
    #[serde(default)]
    pub max_distance_from_focus: Option<f64>,
}

impl From<ProfileRecord> for TopicProfile {
    fn from(record: ProfileRecord) -> Self {
        let mut profile = TopicProfile::new()
            .with_location_focus(record.location_focus)
            .with_activity_tags(record.activity_tags)
            .with_ideal_features(record.ideal_features);
        if let Some(minutes) = record.max_distance_from_focus {
            profile = profile.with_max_distance(minutes);
        }
        profile
    }
}

/// Layout of `profiles.json`: a default profile plus per-topic entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilesFile {
    /// Profile used for topics without a dedicated entry.
    #[serde(default)]
    pub default: ProfileRecord,
    /// Profiles keyed by topic slug.
    #[serde(default)]
    pub topics: BTreeMap<String, ProfileRecord>,
}
