//! Attribute model
//!
//! Product attributes (size, color, ...) and their terms.

use serde::{Deserialize, Serialize};

/// A product attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: u64,
    pub slug: String,
    pub name: String,
    /// Terms of this attribute, only present once fetched separately
    #[serde(default)]
    pub terms: Vec<AttributeTerm>,
}

impl Attribute {
    pub fn new(id: u64, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            terms: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Copy of this attribute carrying the given terms
    pub fn with_terms(&self, terms: Vec<AttributeTerm>) -> Self {
        Self {
            terms,
            ..self.clone()
        }
    }
}

/// A single value of an attribute (e.g. "XL" for "size")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTerm {
    pub id: u64,
    pub slug: String,
    pub name: String,
}
