//! Blog content records carrying relatedness classification.
//!
//! A [`ContentItem`] is a read-only view of one published article as supplied
//! by the data layer. Display fields are carried for presentation; only the
//! classification fields (`category_id`, `audience_ids`, `season_ids`)
//! participate in relevance scoring.

/// A blog post with the classification tags used for relatedness scoring.
///
/// Classification fields mirror the upstream content store: a post has at
/// most one category and any number of audience and season ids. The raw id
/// vectors may contain duplicates; [`ContentTags`](crate::ContentTags)
/// deduplicates them before any counting happens.
///
/// # Examples
/// ```
/// use coveside_core::ContentItem;
///
/// let post = ContentItem::new("p-1", "Walking the Heathland", "walking-the-heathland")
///     .with_category("nature")
///     .with_audiences(["families"])
///     .with_seasons(["summer", "winter"]);
///
/// assert_eq!(post.category_id.as_deref(), Some("nature"));
/// assert_eq!(post.season_ids.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentItem {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Teaser text, if any. Irrelevant to scoring.
    pub excerpt: Option<String>,
    /// ISO-8601 publication date; `None` marks an unpublished draft.
    pub published: Option<String>,
    /// Single-valued category classification.
    pub category_id: Option<String>,
    /// Audience classification ids.
    pub audience_ids: Vec<String>,
    /// Season classification ids.
    pub season_ids: Vec<String>,
}

impl ContentItem {
    /// Construct a post with empty classification.
    ///
    /// # Examples
    /// ```
    /// use coveside_core::ContentItem;
    ///
    /// let post = ContentItem::new("p-1", "Estuary Birdlife", "estuary-birdlife");
    /// assert!(post.category_id.is_none());
    /// assert!(post.audience_ids.is_empty());
    /// ```
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            excerpt: None,
            published: None,
            category_id: None,
            audience_ids: Vec::new(),
            season_ids: Vec::new(),
        }
    }

    /// Set the category while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Replace the audience ids while returning `self` for chaining.
    #[must_use]
    pub fn with_audiences<I, S>(mut self, audience_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.audience_ids = audience_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the season ids while returning `self` for chaining.
    #[must_use]
    pub fn with_seasons<I, S>(mut self, season_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.season_ids = season_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the publication date while returning `self` for chaining.
    #[must_use]
    pub fn with_published(mut self, date: impl Into<String>) -> Self {
        self.published = Some(date.into());
        self
    }

    /// Set the teaser text while returning `self` for chaining.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Report whether the post has a publication date.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.published.is_some()
    }
}
