//! Load the content catalogue from a directory of JSON files.
//!
//! A catalogue directory holds `posts.json`, `properties.json`, and an
//! optional `profiles.json`. Loading filters out unpublished drafts and
//! orders posts most-recent-first so the ranking pipeline's stable sort
//! resolves ties newest-first.

use std::collections::BTreeMap;

use camino::Utf8Path;
use coveside_core::{ContentItem, ContentStore, Property, TopicProfile};

use crate::record::{PostRecord, ProfilesFile, PropertyRecord};
use crate::{CatalogueError, ProfileRegistry};

/// File name of the blog post pool inside a catalogue directory.
pub const POSTS_FILE: &str = "posts.json";
/// File name of the property portfolio inside a catalogue directory.
pub const PROPERTIES_FILE: &str = "properties.json";
/// File name of the topic profile configuration inside a catalogue
/// directory. Optional; an absent file yields an empty registry.
pub const PROFILES_FILE: &str = "profiles.json";

/// The loaded content catalogue: published posts, properties, and topic
/// profiles.
///
/// Posts are held most-recent-first; drafts never enter the pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    posts: Vec<ContentItem>,
    properties: Vec<Property>,
    profiles: ProfileRegistry,
}

impl Catalogue {
    /// Load a catalogue from a directory.
    ///
    /// # Errors
    /// Returns [`CatalogueError`] when `posts.json` or `properties.json`
    /// cannot be read or parsed, or when a present `profiles.json` is
    /// malformed.
    pub fn load(dir: &Utf8Path) -> Result<Self, CatalogueError> {
        let posts = load_posts(&dir.join(POSTS_FILE))?;
        let properties = load_properties(&dir.join(PROPERTIES_FILE))?;
        let profiles = load_profiles(&dir.join(PROFILES_FILE))?;
        log::info!(
            "loaded catalogue from {dir}: {} posts, {} properties, {} topic profiles",
            posts.len(),
            properties.len(),
            profiles.len(),
        );
        Ok(Self {
            posts,
            properties,
            profiles,
        })
    }

    /// Published posts, most recent first.
    #[must_use]
    pub fn posts(&self) -> &[ContentItem] {
        &self.posts
    }

    /// The property portfolio.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// The topic profile registry.
    #[must_use]
    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    /// Find a post by id or slug.
    #[must_use]
    pub fn find_post(&self, key: &str) -> Option<&ContentItem> {
        self.posts
            .iter()
            .find(|post| post.id == key || post.slug == key)
    }

    /// Find a property by id or slug.
    #[must_use]
    pub fn find_property(&self, key: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|property| property.id == key || property.slug == key)
    }
}

impl ContentStore for Catalogue {
    fn published_posts(&self) -> Box<dyn Iterator<Item = ContentItem> + Send + '_> {
        Box::new(self.posts.iter().cloned())
    }

    fn properties(&self) -> Box<dyn Iterator<Item = Property> + Send + '_> {
        Box::new(self.properties.iter().cloned())
    }
}

fn load_posts(path: &Utf8Path) -> Result<Vec<ContentItem>, CatalogueError> {
    let records: Vec<PostRecord> = parse_file(path)?;
    let total = records.len();
    let mut posts: Vec<ContentItem> = records
        .into_iter()
        .map(ContentItem::from)
        .filter(ContentItem::is_published)
        .collect();
    let drafts = total - posts.len();
    if drafts > 0 {
        log::debug!("skipped {drafts} unpublished drafts in {path}");
    }
    // ISO-8601 dates order lexicographically; newest first.
    posts.sort_by(|a, b| b.published.cmp(&a.published));
    Ok(posts)
}

fn load_properties(path: &Utf8Path) -> Result<Vec<Property>, CatalogueError> {
    let records: Vec<PropertyRecord> = parse_file(path)?;
    Ok(records.into_iter().map(Property::from).collect())
}

fn load_profiles(path: &Utf8Path) -> Result<ProfileRegistry, CatalogueError> {
    if !path.exists() {
        log::debug!("no profile configuration at {path}; using an empty registry");
        return Ok(ProfileRegistry::default());
    }
    let file: ProfilesFile = parse_file(path)?;
    let topics: BTreeMap<String, TopicProfile> = file
        .topics
        .into_iter()
        .map(|(slug, record)| (slug, TopicProfile::from(record)))
        .collect();
    Ok(ProfileRegistry::new(topics, TopicProfile::from(file.default)))
}

fn parse_file<T>(path: &Utf8Path) -> Result<T, CatalogueError>
where
    T: serde::de::DeserializeOwned,
{
    let contents =
        std::fs::read_to_string(path.as_std_path()).map_err(|source| CatalogueError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| CatalogueError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
