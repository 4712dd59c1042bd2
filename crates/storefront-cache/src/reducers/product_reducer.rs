//! Product Reducer
//!
//! Products plus the nested category and attribute collections of the
//! catalog. Variation lists arrive separately and are merged into the
//! product record they belong to.

use std::sync::Arc;

use super::collection_reducer::CollectionReducer;
use crate::actions::{action_type, Action};
use crate::domain_models::{Attribute, Category, Product};
use crate::state::{CollectionState, ProductState};

fn products() -> CollectionReducer<Product, Action> {
    CollectionReducer::by_id(action_type::PRODUCTS, Product::id).with_extension(merge_variations)
}

fn categories() -> CollectionReducer<Category, Action> {
    CollectionReducer::by_id(action_type::PRODUCT_CATEGORIES, Category::id)
}

fn attributes() -> CollectionReducer<Attribute, Action> {
    CollectionReducer::by_id(action_type::PRODUCT_ATTRIBUTES, Attribute::id)
}

/// Replace the variations of one product, keeping the rest of the record
fn merge_variations(
    state: &CollectionState<Product>,
    action: &Action,
) -> Option<CollectionState<Product>> {
    let Action::ProductVariations(loaded) = action else {
        return None;
    };

    let next = state.with_entity_updated(&loaded.product, |product| {
        product.with_variations(loaded.variations.clone())
    });
    match &next {
        Some(_) => log::debug!(
            "Merged {} variations into product {}",
            loaded.variations.len(),
            loaded.product
        ),
        None => log::warn!(
            "Variations for product {} ignored: product not loaded",
            loaded.product
        ),
    }
    next
}

/// Reduce the product slice
pub fn reduce(state: &Arc<ProductState>, action: &Action) -> Arc<ProductState> {
    let items = products().reduce(&state.items, action);
    let categories = categories().reduce(&state.categories, action);
    let attributes = attributes().reduce(&state.attributes, action);

    if Arc::ptr_eq(&items, &state.items)
        && Arc::ptr_eq(&categories, &state.categories)
        && Arc::ptr_eq(&attributes, &state.attributes)
    {
        return Arc::clone(state);
    }

    Arc::new(ProductState {
        items,
        categories,
        attributes,
    })
}
