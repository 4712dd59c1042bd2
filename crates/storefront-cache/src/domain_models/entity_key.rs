//! Entity keys
//!
//! Every entity kind is indexed either by a numeric id or by a string slug.
//! The choice is fixed per kind when its reducer is built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a single entity inside a collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityKey {
    /// Numeric identifier (products, categories, orders, ...)
    Id(u64),
    /// String slug (posts, pages, country codes)
    Slug(String),
}

impl EntityKey {
    pub fn slug(slug: impl Into<String>) -> Self {
        Self::Slug(slug.into())
    }

    /// The key field this key belongs to
    pub fn field(&self) -> KeyField {
        match self {
            Self::Id(_) => KeyField::Id,
            Self::Slug(_) => KeyField::Slug,
        }
    }
}

impl From<u64> for EntityKey {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for EntityKey {
    fn from(slug: &str) -> Self {
        Self::Slug(slug.to_string())
    }
}

impl From<String> for EntityKey {
    fn from(slug: String) -> Self {
        Self::Slug(slug)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Slug(slug) => f.write_str(slug),
        }
    }
}

/// Which record field an entity kind is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
    Id,
    Slug,
}

impl KeyField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Slug => "slug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(EntityKey::Id(42).to_string(), "42");
        assert_eq!(EntityKey::slug("hello-world").to_string(), "hello-world");
    }

    #[test]
    fn test_field() {
        assert_eq!(EntityKey::from(7).field(), KeyField::Id);
        assert_eq!(EntityKey::from("de").field(), KeyField::Slug);
        assert_eq!(KeyField::Slug.name(), "slug");
    }

    #[test]
    fn test_untagged_serde() {
        let keys: Vec<EntityKey> = serde_json::from_str(r#"[12, "about-us"]"#).unwrap();
        assert_eq!(keys, vec![EntityKey::Id(12), EntityKey::slug("about-us")]);
    }
}
