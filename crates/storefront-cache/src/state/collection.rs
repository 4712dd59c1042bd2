//! Collection state
//!
//! The normalized index for one entity kind plus its fetch status. Values are
//! only ever built by the collection reducer; readers go through the
//! selectors in [`crate::selectors`].

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

use crate::actions::RequestId;
use crate::domain_models::{EntityKey, FetchError};

/// Index + status bundle for one entity kind
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub(crate) by_id: HashMap<EntityKey, Arc<T>>,
    /// Key order of the most recent full-list fetch
    pub(crate) all_ids: Vec<EntityKey>,
    pub(crate) is_fetching: bool,
    pub(crate) last_fetched: Option<DateTime<Utc>>,
    pub(crate) error: Option<FetchError>,
    /// Most recent tagged full-list request start
    pub(crate) latest_list_request: Option<RequestId>,
    /// Most recent tagged single-entity request start, per key
    pub(crate) latest_key_requests: HashMap<EntityKey, RequestId>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            all_ids: Vec::new(),
            is_fetching: false,
            last_fetched: None,
            error: None,
            latest_list_request: None,
            latest_key_requests: HashMap::new(),
        }
    }
}

/// Broken index invariants; always a bug in whoever built the state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("key {0} is listed in all_ids but missing from by_id")]
    DanglingKey(EntityKey),
    #[error("key {0} is listed more than once in all_ids")]
    DuplicateKey(EntityKey),
}

impl<T: Clone> CollectionState<T> {
    /// Copy of this state with the record under `key` replaced by `update(record)`
    ///
    /// Returns `None` when `key` is not indexed. Ordering and status are kept,
    /// so the result satisfies the same invariants as `self`. This is the
    /// building block for reducer extensions.
    pub fn with_entity_updated(
        &self,
        key: &EntityKey,
        update: impl FnOnce(&T) -> T,
    ) -> Option<Self> {
        let current = self.by_id.get(key)?;
        let mut next = self.clone();
        next.by_id.insert(key.clone(), Arc::new(update(current)));
        Some(next)
    }
}

impl<T> CollectionState<T> {
    /// Verify that every listed key is indexed exactly once
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut seen = HashSet::with_capacity(self.all_ids.len());
        for key in &self.all_ids {
            if !self.by_id.contains_key(key) {
                return Err(InvariantError::DanglingKey(key.clone()));
            }
            if !seen.insert(key) {
                return Err(InvariantError::DuplicateKey(key.clone()));
            }
        }
        Ok(())
    }
}
