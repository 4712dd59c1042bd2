//! Account Reducer

use std::sync::Arc;

use super::collection_reducer::CollectionReducer;
use crate::actions::{action_type, Action};
use crate::domain_models::Account;
use crate::state::CollectionState;

/// Reducer for customer accounts
pub fn reducer() -> CollectionReducer<Account, Action> {
    CollectionReducer::by_id(action_type::ACCOUNTS, Account::id)
}

pub fn reduce(state: &Arc<CollectionState<Account>>, action: &Action) -> Arc<CollectionState<Account>> {
    reducer().reduce(state, action)
}
