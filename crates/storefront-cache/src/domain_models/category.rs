//! Category model

use serde::{Deserialize, Serialize};

/// A product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub slug: String,
    pub name: String,
    /// Parent category id (None for top level categories)
    #[serde(default)]
    pub parent: Option<u64>,
    /// Number of products in this category
    #[serde(default)]
    pub count: u32,
}

impl Category {
    pub fn new(id: u64, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            parent: None,
            count: 0,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}
