//! Country Reducer
//!
//! Countries are keyed by their ISO code, stored in the slug slot.

use std::sync::Arc;

use super::collection_reducer::CollectionReducer;
use crate::actions::{action_type, Action};
use crate::domain_models::Country;
use crate::state::CollectionState;

pub fn reducer() -> CollectionReducer<Country, Action> {
    CollectionReducer::by_slug(action_type::COUNTRIES, Country::code)
}

pub fn reduce(state: &Arc<CollectionState<Country>>, action: &Action) -> Arc<CollectionState<Country>> {
    reducer().reduce(state, action)
}
