//! Collection selectors
//!
//! Read-only views over a [`CollectionState`]. These are the only way
//! consumers get at cached records.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain_models::{EntityKey, FetchError};
use crate::state::CollectionState;

/// Records in the order of the last full-list fetch
///
/// A listed key without a record is a broken invariant and trips a debug
/// assertion; no placeholder is ever produced.
pub fn all_items<T>(state: &CollectionState<T>) -> Vec<Arc<T>> {
    state
        .all_ids
        .iter()
        .filter_map(|key| {
            let item = state.by_id.get(key);
            debug_assert!(item.is_some(), "all_ids lists {} but by_id has no record", key);
            item.cloned()
        })
        .collect()
}

/// Record stored under `key`, listed or not
pub fn item_by_id<T>(state: &CollectionState<T>, key: &EntityKey) -> Option<Arc<T>> {
    state.by_id.get(key).cloned()
}

/// Whether a record is stored under `key`
pub fn contains<T>(state: &CollectionState<T>, key: &EntityKey) -> bool {
    state.by_id.contains_key(key)
}

pub fn is_fetching<T>(state: &CollectionState<T>) -> bool {
    state.is_fetching
}

/// Completion time of the last successful full-list fetch
pub fn last_fetched<T>(state: &CollectionState<T>) -> Option<DateTime<Utc>> {
    state.last_fetched
}

/// Last reported error, if not cleared since
pub fn error<T>(state: &CollectionState<T>) -> Option<FetchError> {
    state.error.clone()
}
