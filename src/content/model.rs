//! Article, category and tag models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author block embedded in every post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Display name
    pub name: String,

    /// Avatar image URL
    pub avatar: String,

    /// Short biography
    pub bio: String,
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier
    pub id: String,

    /// URL-safe unique slug; the external lookup key for detail pages
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short excerpt shown in listings
    pub excerpt: String,

    /// Raw markdown content
    pub raw: String,

    /// Rendered HTML content
    pub content: String,

    /// Embedded author record
    pub author: Author,

    /// Publication date
    pub published_at: DateTime<Utc>,

    /// Last updated date
    pub updated_at: Option<DateTime<Utc>>,

    /// Free-text tag labels, in authored order
    pub tags: Vec<String>,

    /// Single category label
    pub category: String,

    /// Estimated reading time in minutes
    pub reading_time: u32,

    /// Whether the post gets prominent placement
    pub featured: bool,

    /// Cover image URL
    pub cover_image: String,
}

/// A category with its derived post count
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub count: usize,
}

impl Category {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slug::slugify(name),
            description: description.to_string(),
            count: 0,
        }
    }
}

/// A tag with its derived usage count
#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slug::slugify(name),
            count: 0,
        }
    }
}
