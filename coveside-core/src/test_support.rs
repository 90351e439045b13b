//! Test-only, in-memory `ContentStore` implementation used by unit and
//! behaviour tests.

use crate::{ContentItem, ContentStore, Property};

/// In-memory `ContentStore` used in tests.
///
/// The store returns items in insertion order and performs no filtering;
/// callers are expected to insert published posts newest-first, matching
/// the contract of [`ContentStore`].
#[derive(Default, Debug)]
pub struct MemoryCatalogue {
    posts: Vec<ContentItem>,
    properties: Vec<Property>,
}

impl MemoryCatalogue {
    /// Create a store containing the given posts.
    pub fn with_posts<I>(posts: I) -> Self
    where
        I: IntoIterator<Item = ContentItem>,
    {
        Self {
            posts: posts.into_iter().collect(),
            properties: Vec::new(),
        }
    }

    /// Create a store containing the given properties.
    pub fn with_properties<I>(properties: I) -> Self
    where
        I: IntoIterator<Item = Property>,
    {
        Self {
            posts: Vec::new(),
            properties: properties.into_iter().collect(),
        }
    }

    /// Add posts while returning `self` for chaining.
    #[must_use]
    pub fn and_posts<I>(mut self, posts: I) -> Self
    where
        I: IntoIterator<Item = ContentItem>,
    {
        self.posts.extend(posts);
        self
    }

    /// Add properties while returning `self` for chaining.
    #[must_use]
    pub fn and_properties<I>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = Property>,
    {
        self.properties.extend(properties);
        self
    }
}

impl ContentStore for MemoryCatalogue {
    fn published_posts(&self) -> Box<dyn Iterator<Item = ContentItem> + Send + '_> {
        Box::new(self.posts.iter().cloned())
    }

    fn properties(&self) -> Box<dyn Iterator<Item = Property> + Send + '_> {
        Box::new(self.properties.iter().cloned())
    }
}
