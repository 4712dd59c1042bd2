//! Category Reducer

use std::sync::Arc;

use super::collection_reducer::CollectionReducer;
use crate::actions::{action_type, Action};
use crate::domain_models::Category;
use crate::state::CollectionState;

pub fn reducer() -> CollectionReducer<Category, Action> {
    CollectionReducer::by_id(action_type::CATEGORIES, Category::id)
}

pub fn reduce(state: &Arc<CollectionState<Category>>, action: &Action) -> Arc<CollectionState<Category>> {
    reducer().reduce(state, action)
}
