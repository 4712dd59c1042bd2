//! Static page model

use serde::{Deserialize, Serialize};

/// A CMS page, keyed by slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub slug: String,
    pub title: String,
    /// Rendered HTML body
    #[serde(default)]
    pub content: String,
}

impl Page {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            content: String::new(),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}
