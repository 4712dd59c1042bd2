//! Product model
//!
//! Domain model for catalog products and their variations.

use serde::{Deserialize, Serialize};

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub id: u64,
    /// URL slug
    pub slug: String,
    /// Display name
    pub name: String,
    /// Current price as delivered by the shop backend (decimal string)
    #[serde(default)]
    pub price: String,
    /// Ids of the categories this product is listed in
    #[serde(default)]
    pub category_ids: Vec<u64>,
    /// Ids of the attributes used by this product's variations
    #[serde(default)]
    pub attribute_ids: Vec<u64>,
    /// Variations, only present once they have been fetched separately
    #[serde(default)]
    pub variations: Vec<Variation>,
}

impl Product {
    pub fn new(id: u64, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            price: String::new(),
            category_ids: Vec::new(),
            attribute_ids: Vec::new(),
            variations: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Set the price
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Copy of this product carrying the given variations
    pub fn with_variations(&self, variations: Vec<Variation>) -> Self {
        Self {
            variations,
            ..self.clone()
        }
    }
}

/// A purchasable variation of a variable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: u64,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub price: String,
    /// Attribute options selecting this variation (e.g. "size" -> "XL")
    #[serde(default)]
    pub options: Vec<VariationOption>,
    #[serde(default)]
    pub in_stock: bool,
}

/// One attribute option of a variation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationOption {
    pub attribute: String,
    pub value: String,
}
