//! Product slice selectors
//!
//! The nested category and attribute collections reuse the generic
//! collection selectors through [`wrap`] / [`wrap_with`].

use std::sync::Arc;

use super::{all_items, is_fetching, item_by_id, wrap, wrap_with};
use crate::domain_models::{Attribute, Category, EntityKey, Product};
use crate::state::{CollectionState, ProductState};

pub fn items_of(state: &ProductState) -> &CollectionState<Product> {
    &state.items
}

pub fn categories_of(state: &ProductState) -> &CollectionState<Category> {
    &state.categories
}

pub fn attributes_of(state: &ProductState) -> &CollectionState<Attribute> {
    &state.attributes
}

pub fn all_products() -> impl Fn(&ProductState) -> Vec<Arc<Product>> {
    wrap(all_items::<Product>, items_of)
}

pub fn product_by_id() -> impl Fn(&ProductState, &EntityKey) -> Option<Arc<Product>> {
    wrap_with(item_by_id::<Product>, items_of)
}

pub fn all_categories() -> impl Fn(&ProductState) -> Vec<Arc<Category>> {
    wrap(all_items::<Category>, categories_of)
}

pub fn category_by_id() -> impl Fn(&ProductState, &EntityKey) -> Option<Arc<Category>> {
    wrap_with(item_by_id::<Category>, categories_of)
}

pub fn categories_fetching() -> impl Fn(&ProductState) -> bool {
    wrap(is_fetching::<Category>, categories_of)
}

pub fn all_attributes() -> impl Fn(&ProductState) -> Vec<Arc<Attribute>> {
    wrap(all_items::<Attribute>, attributes_of)
}

pub fn attribute_by_id() -> impl Fn(&ProductState, &EntityKey) -> Option<Arc<Attribute>> {
    wrap_with(item_by_id::<Attribute>, attributes_of)
}

/// Categories of one product, in the product's own order
///
/// Category ids that are not cached (yet) are skipped.
pub fn categories_for_product(state: &ProductState, product: &EntityKey) -> Vec<Arc<Category>> {
    let Some(product) = product_by_id()(state, product) else {
        return Vec::new();
    };
    let category = category_by_id();
    product
        .category_ids
        .iter()
        .filter_map(|id| category(state, &EntityKey::Id(*id)))
        .collect()
}
