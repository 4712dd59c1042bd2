//! Product slice
//!
//! Products plus the category and attribute collections fetched in the
//! context of the product catalog.

use std::sync::Arc;

use super::CollectionState;
use crate::domain_models::{Attribute, Category, Product};

/// Product slice state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductState {
    pub items: Arc<CollectionState<Product>>,
    pub categories: Arc<CollectionState<Category>>,
    pub attributes: Arc<CollectionState<Attribute>>,
}
