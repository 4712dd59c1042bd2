//! Sale Reducer

use std::sync::Arc;

use super::collection_reducer::CollectionReducer;
use crate::actions::{action_type, Action};
use crate::domain_models::Sale;
use crate::state::CollectionState;

pub fn reducer() -> CollectionReducer<Sale, Action> {
    CollectionReducer::by_id(action_type::SALES, Sale::id)
}

pub fn reduce(state: &Arc<CollectionState<Sale>>, action: &Action) -> Arc<CollectionState<Sale>> {
    reducer().reduce(state, action)
}
