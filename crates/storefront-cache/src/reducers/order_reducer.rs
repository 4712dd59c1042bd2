//! Order Reducer
//!
//! Orders of the signed in customer.

use std::sync::Arc;

use super::collection_reducer::CollectionReducer;
use crate::actions::{action_type, Action};
use crate::domain_models::Order;
use crate::state::CollectionState;

pub fn reducer() -> CollectionReducer<Order, Action> {
    CollectionReducer::by_id(action_type::ORDERS, Order::id)
}

pub fn reduce(state: &Arc<CollectionState<Order>>, action: &Action) -> Arc<CollectionState<Order>> {
    reducer().reduce(state, action)
}
