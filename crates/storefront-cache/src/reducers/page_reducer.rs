//! Page Reducer

use std::sync::Arc;

use super::collection_reducer::CollectionReducer;
use crate::actions::{action_type, Action};
use crate::domain_models::Page;
use crate::state::CollectionState;

pub fn reducer() -> CollectionReducer<Page, Action> {
    CollectionReducer::by_slug(action_type::PAGES, Page::slug)
}

pub fn reduce(state: &Arc<CollectionState<Page>>, action: &Action) -> Arc<CollectionState<Page>> {
    reducer().reduce(state, action)
}
