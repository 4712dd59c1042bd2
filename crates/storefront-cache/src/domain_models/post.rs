//! Blog post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post, keyed by slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            excerpt: String::new(),
            published_at: None,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}
