use std::sync::Arc;

use crate::actions::Action;
use crate::reducers::{
    account_reducer, attribute_reducer, category_reducer, country_reducer, order_reducer,
    page_reducer, post_reducer, product_reducer, sale_reducer,
};
use crate::state::RootState;

/// Root reducer - runs every domain reducer on the action
///
/// Returns the same `Arc` when no slice changed.
pub fn reduce(state: &Arc<RootState>, action: &Action) -> Arc<RootState> {
    let next = RootState {
        products: product_reducer::reduce(&state.products, action),
        categories: category_reducer::reduce(&state.categories, action),
        attributes: attribute_reducer::reduce(&state.attributes, action),
        posts: post_reducer::reduce(&state.posts, action),
        pages: page_reducer::reduce(&state.pages, action),
        accounts: account_reducer::reduce(&state.accounts, action),
        orders: order_reducer::reduce(&state.orders, action),
        sales: sale_reducer::reduce(&state.sales, action),
        countries: country_reducer::reduce(&state.countries, action),
    };

    if is_unchanged(state, &next) {
        log::trace!("Action {} left the state unchanged", action.action_type());
        return Arc::clone(state);
    }

    Arc::new(next)
}

fn is_unchanged(prev: &RootState, next: &RootState) -> bool {
    Arc::ptr_eq(&prev.products, &next.products)
        && Arc::ptr_eq(&prev.categories, &next.categories)
        && Arc::ptr_eq(&prev.attributes, &next.attributes)
        && Arc::ptr_eq(&prev.posts, &next.posts)
        && Arc::ptr_eq(&prev.pages, &next.pages)
        && Arc::ptr_eq(&prev.accounts, &next.accounts)
        && Arc::ptr_eq(&prev.orders, &next.orders)
        && Arc::ptr_eq(&prev.sales, &next.sales)
        && Arc::ptr_eq(&prev.countries, &next.countries)
}
