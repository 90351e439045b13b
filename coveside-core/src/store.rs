//! Data access traits for content pools.
//!
//! The `ContentStore` trait defines a read-only interface over the two
//! candidate pools the rankers consume. Implementations own fetching,
//! caching, and whatever storage backs them; the engine only iterates.

use crate::{ContentItem, Property};

/// Read-only access to the published content pools.
///
/// Implementations must return only published posts, ordered
/// most-recent-first: the ranking pipeline's stable sort turns that order
/// into a deterministic newest-wins tie-break.
pub trait ContentStore {
    /// Iterate over published posts, most recent first.
    fn published_posts(&self) -> Box<dyn Iterator<Item = ContentItem> + Send + '_>;

    /// Iterate over the property portfolio.
    fn properties(&self) -> Box<dyn Iterator<Item = Property> + Send + '_>;
}
