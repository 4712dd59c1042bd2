//! Root selectors
//!
//! Projections from [`RootState`] to each slice, and the product slice
//! selectors rebased onto the root.

use std::sync::Arc;

use super::{product, wrap, wrap_with};
use crate::domain_models::{
    Account, Attribute, Category, Country, EntityKey, Order, Page, Post, Sale,
};
use crate::state::{CollectionState, ProductState, RootState};

pub fn products_of(state: &RootState) -> &ProductState {
    &state.products
}

pub fn categories_of(state: &RootState) -> &CollectionState<Category> {
    &state.categories
}

pub fn attributes_of(state: &RootState) -> &CollectionState<Attribute> {
    &state.attributes
}

pub fn posts_of(state: &RootState) -> &CollectionState<Post> {
    &state.posts
}

pub fn pages_of(state: &RootState) -> &CollectionState<Page> {
    &state.pages
}

pub fn accounts_of(state: &RootState) -> &CollectionState<Account> {
    &state.accounts
}

pub fn orders_of(state: &RootState) -> &CollectionState<Order> {
    &state.orders
}

pub fn sales_of(state: &RootState) -> &CollectionState<Sale> {
    &state.sales
}

pub fn countries_of(state: &RootState) -> &CollectionState<Country> {
    &state.countries
}

pub fn product_categories() -> impl Fn(&RootState) -> Vec<Arc<Category>> {
    wrap(product::all_categories(), products_of)
}

pub fn product_category_by_id() -> impl Fn(&RootState, &EntityKey) -> Option<Arc<Category>> {
    wrap_with(product::category_by_id(), products_of)
}

pub fn product_attributes() -> impl Fn(&RootState) -> Vec<Arc<Attribute>> {
    wrap(product::all_attributes(), products_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{action_type, Action, Fetch};
    use crate::reducers::app_reducer::reduce;
    use crate::selectors::{all_items, item_by_id};

    #[test]
    fn test_two_level_rebasing() {
        let state = reduce(
            &Arc::new(RootState::default()),
            &Action::from(Fetch::received(
                action_type::PRODUCT_CATEGORIES,
                vec![
                    Category::new(1, "tops", "Tops"),
                    Category::new(2, "bottoms", "Bottoms"),
                ],
            )),
        );
        let state: &RootState = &state;

        let combined = wrap(all_items::<Category>, |root: &RootState| {
            product::categories_of(products_of(root))
        });
        assert_eq!(product_categories()(state), combined(state));
        assert_eq!(product_categories()(state).len(), 2);
        assert_eq!(
            product_category_by_id()(state, &EntityKey::Id(2)),
            item_by_id(&state.products.categories, &EntityKey::Id(2))
        );
        assert!(product_attributes()(state).is_empty());

        // Top level categories are a different collection
        assert!(all_items(categories_of(state)).is_empty());
    }
}
