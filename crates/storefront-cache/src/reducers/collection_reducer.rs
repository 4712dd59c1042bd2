//! Collection Reducer
//!
//! Generic reducer shared by every entity kind. One instance is configured per
//! kind with the action type it answers to, the record field it is keyed by
//! and, optionally, an extension for kind specific actions.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::actions::{AsFetch, ErrorUpdate, Fetch, Payload, RequestId};
use crate::domain_models::{EntityKey, KeyField};
use crate::state::CollectionState;

/// Extension transition for actions the generic reducer does not handle
///
/// Returns `None` when the action does not apply, in which case the reducer
/// hands back the previous state unchanged.
pub type Extension<T, A> = fn(&CollectionState<T>, &A) -> Option<CollectionState<T>>;

/// How to read the key out of a record
enum KeySelector<T> {
    Id(fn(&T) -> u64),
    Slug(fn(&T) -> &str),
}

impl<T> Clone for KeySelector<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for KeySelector<T> {}

impl<T> KeySelector<T> {
    fn key_of(&self, record: &T) -> EntityKey {
        match self {
            Self::Id(id) => EntityKey::Id(id(record)),
            Self::Slug(slug) => EntityKey::Slug(slug(record).to_string()),
        }
    }

    fn field(&self) -> KeyField {
        match self {
            Self::Id(_) => KeyField::Id,
            Self::Slug(_) => KeyField::Slug,
        }
    }
}

/// Reducer for one entity kind
pub struct CollectionReducer<T, A> {
    action_type: &'static str,
    key: KeySelector<T>,
    extension: Option<Extension<T, A>>,
}

impl<T, A> CollectionReducer<T, A>
where
    T: Clone,
    A: AsFetch<T>,
{
    /// Reducer for a kind keyed by a numeric id
    pub fn by_id(action_type: &'static str, id: fn(&T) -> u64) -> Self {
        Self {
            action_type,
            key: KeySelector::Id(id),
            extension: None,
        }
    }

    /// Reducer for a kind keyed by a string slug
    pub fn by_slug(action_type: &'static str, slug: fn(&T) -> &str) -> Self {
        Self {
            action_type,
            key: KeySelector::Slug(slug),
            extension: None,
        }
    }

    /// Consult `extension` for actions this reducer does not recognize
    pub fn with_extension(mut self, extension: Extension<T, A>) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn action_type(&self) -> &'static str {
        self.action_type
    }

    pub fn key_field(&self) -> KeyField {
        self.key.field()
    }

    /// Apply `action` to `state`
    ///
    /// Actions for other kinds return a clone of the same `Arc`, so
    /// `Arc::ptr_eq(state, &result)` tells the caller nothing changed.
    pub fn reduce(
        &self,
        state: &Arc<CollectionState<T>>,
        action: &A,
    ) -> Arc<CollectionState<T>> {
        match action.as_fetch() {
            Some(fetch) if fetch.action_type == self.action_type => {
                self.apply_fetch(state, fetch)
            }
            _ => self.apply_extension(state, action),
        }
    }

    fn apply_extension(
        &self,
        state: &Arc<CollectionState<T>>,
        action: &A,
    ) -> Arc<CollectionState<T>> {
        match self.extension.and_then(|extension| extension(state, action)) {
            Some(next) => Arc::new(next),
            None => Arc::clone(state),
        }
    }

    fn apply_fetch(
        &self,
        state: &Arc<CollectionState<T>>,
        fetch: &Fetch<T>,
    ) -> Arc<CollectionState<T>> {
        let target = self.target_of(fetch);

        if let (false, Some(request), Some(latest)) =
            (fetch.is_fetching, fetch.request, latest_request(state, &target))
        {
            if request < latest {
                log::warn!(
                    "{}: dropping response for request {:?} ({}), request {:?} is newer",
                    self.action_type,
                    request,
                    target,
                    latest
                );
                return Arc::clone(state);
            }
        }

        let mut next = CollectionState::clone(state);
        next.is_fetching = fetch.is_fetching;

        if fetch.is_fetching {
            // A request start may only reset the error
            match &fetch.error {
                ErrorUpdate::Clear => next.error = None,
                ErrorUpdate::Set(error) => log::debug!(
                    "{}: ignoring error on request start: {}",
                    self.action_type,
                    error
                ),
                ErrorUpdate::Keep => {}
            }
            if let Some(request) = fetch.request {
                match target {
                    Target::List => {
                        next.latest_list_request = next.latest_list_request.max(Some(request));
                    }
                    Target::Entity(key) => {
                        let latest = next.latest_key_requests.entry(key).or_insert(request);
                        *latest = (*latest).max(request);
                    }
                }
            }
            log::debug!("{}: fetch started", self.action_type);
            return Arc::new(next);
        }

        match &fetch.error {
            ErrorUpdate::Keep => {}
            ErrorUpdate::Clear => next.error = None,
            ErrorUpdate::Set(error) => next.error = Some(error.clone()),
        }

        match &fetch.payload {
            Payload::Items(items) => {
                self.replace_list(&mut next, items);
                if let Some(completed_at) = fetch.completed_at {
                    next.last_fetched = Some(completed_at);
                }
                log::debug!("{}: received {} items", self.action_type, items.len());
            }
            Payload::Entity(entity) => {
                let key = self.insert(&mut next, entity);
                log::debug!("{}: received entity {}", self.action_type, key);
            }
            Payload::None | Payload::Key(_) => {
                if let Some(error) = &next.error {
                    log::debug!("{}: fetch failed: {}", self.action_type, error);
                }
            }
        }

        Arc::new(next)
    }

    /// Whether `fetch` concerns the whole list or a single entity
    fn target_of(&self, fetch: &Fetch<T>) -> Target {
        match &fetch.payload {
            Payload::Key(key) => {
                if key.field() != self.key.field() {
                    log::warn!(
                        "{}: key {} is not a {}, collection is keyed by {}",
                        self.action_type,
                        key,
                        key.field().name(),
                        self.key.field().name()
                    );
                }
                Target::Entity(key.clone())
            }
            Payload::Entity(entity) => Target::Entity(self.key.key_of(entity)),
            Payload::None | Payload::Items(_) => Target::List,
        }
    }

    /// Index `items` and make their order the new key order
    fn replace_list(&self, state: &mut CollectionState<T>, items: &[T]) {
        let mut seen = HashSet::with_capacity(items.len());
        let mut all_ids = Vec::with_capacity(items.len());
        for item in items {
            let key = self.key.key_of(item);
            state.by_id.insert(key.clone(), Arc::new(item.clone()));
            if seen.insert(key.clone()) {
                all_ids.push(key);
            }
        }
        state.all_ids = all_ids;
    }

    /// Index one entity, appending its key if it is not listed yet
    fn insert(&self, state: &mut CollectionState<T>, entity: &T) -> EntityKey {
        let key = self.key.key_of(entity);
        state.by_id.insert(key.clone(), Arc::new(entity.clone()));
        if !state.all_ids.contains(&key) {
            state.all_ids.push(key.clone());
        }
        key
    }
}

/// What a fetch is about; tagged requests are ordered per target
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    List,
    Entity(EntityKey),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Entity(key) => write!(f, "entity {}", key),
        }
    }
}

/// Latest tagged request start for the same target
fn latest_request<T>(state: &CollectionState<T>, target: &Target) -> Option<RequestId> {
    match target {
        Target::List => state.latest_list_request,
        Target::Entity(key) => state.latest_key_requests.get(key).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::FetchError;
    use crate::selectors::{all_items, error, is_fetching, item_by_id, last_fetched};
    use chrono::TimeZone;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        slug: &'static str,
        title: &'static str,
    }

    fn item(slug: &'static str, title: &'static str) -> Item {
        Item { slug, title }
    }

    fn item_slug(item: &Item) -> &str {
        item.slug
    }

    fn reducer() -> CollectionReducer<Item, Fetch<Item>> {
        CollectionReducer::by_slug("items", item_slug)
    }

    fn empty() -> Arc<CollectionState<Item>> {
        Arc::new(CollectionState::default())
    }

    fn titles(state: &CollectionState<Item>) -> Vec<&'static str> {
        all_items(state).iter().map(|item| item.title).collect()
    }

    fn populated() -> Arc<CollectionState<Item>> {
        reducer().reduce(
            &empty(),
            &Fetch::received("items", vec![item("p1", "One"), item("p2", "Two")]),
        )
    }

    #[test]
    fn test_unrelated_action_returns_same_state() {
        let state = populated();
        let next = reducer().reduce(&state, &Fetch::request("other"));
        assert!(Arc::ptr_eq(&state, &next));

        let next = reducer().reduce(&state, &Fetch::received("other", vec![item("x", "X")]));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_full_list_success_from_empty() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let state = reducer().reduce(
            &empty(),
            &Fetch::received("items", vec![item("p1", "One"), item("p2", "Two")]).completed_at(at),
        );

        assert_eq!(titles(&state), vec!["One", "Two"]);
        assert_eq!(last_fetched(&state), Some(at));
        assert!(!is_fetching(&state));
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn test_full_list_replaces_order_but_keeps_index() {
        let state = populated();
        let next = reducer().reduce(
            &state,
            &Fetch::received(
                "items",
                vec![item("p3", "Three"), item("p1", "One v2"), item("p4", "Four")],
            ),
        );

        assert_eq!(titles(&next), vec!["Three", "One v2", "Four"]);
        // p2 is no longer listed but stays indexed
        assert_eq!(
            item_by_id(&next, &EntityKey::slug("p2")).map(|item| item.title),
            Some("Two")
        );
        assert_eq!(next.check_invariants(), Ok(()));
    }

    #[test]
    fn test_duplicate_keys_in_list_collapse() {
        let state = reducer().reduce(
            &empty(),
            &Fetch::received(
                "items",
                vec![item("a", "first"), item("b", "B"), item("a", "second")],
            ),
        );

        assert_eq!(titles(&state), vec!["second", "B"]);
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn test_single_entity_appends_key() {
        let state = populated();
        let before = state.last_fetched;
        let next = reducer().reduce(&state, &Fetch::received_one("items", item("p3", "Three")));

        assert_eq!(titles(&next), vec!["One", "Two", "Three"]);
        assert_eq!(
            item_by_id(&next, &EntityKey::slug("p3")).map(|item| item.title),
            Some("Three")
        );
        // Prior entries untouched
        assert_eq!(
            item_by_id(&next, &EntityKey::slug("p1")),
            item_by_id(&state, &EntityKey::slug("p1"))
        );
        // Only full-list fetches count as "last fetched"
        assert_eq!(next.last_fetched, before);
    }

    #[test]
    fn test_single_entity_replaces_existing_in_place() {
        let state = populated();
        let next = reducer().reduce(&state, &Fetch::received_one("items", item("p1", "One v2")));
        assert_eq!(titles(&next), vec!["One v2", "Two"]);
    }

    #[test]
    fn test_request_start_keeps_index_and_error() {
        let state = reducer().reduce(&populated(), &Fetch::failed("items", FetchError::new("boom")));
        let next = reducer().reduce(&state, &Fetch::request("items"));

        assert!(is_fetching(&next));
        assert_eq!(error(&next), Some(FetchError::new("boom")));
        assert_eq!(titles(&next), vec!["One", "Two"]);
        assert_eq!(next.last_fetched, state.last_fetched);
    }

    #[test]
    fn test_request_start_can_clear_error() {
        let state = reducer().reduce(&populated(), &Fetch::failed("items", FetchError::new("boom")));
        let next = reducer().reduce(&state, &Fetch::request("items").clearing_error());

        assert!(is_fetching(&next));
        assert_eq!(error(&next), None);
    }

    #[test]
    fn test_request_start_cannot_replace_error() {
        let state = reducer().reduce(&populated(), &Fetch::failed("items", FetchError::new("first")));
        let start = Fetch {
            error: ErrorUpdate::Set(FetchError::new("second")),
            ..Fetch::request("items")
        };
        let next = reducer().reduce(&state, &start);

        assert!(is_fetching(&next));
        assert_eq!(error(&next), Some(FetchError::new("first")));
    }

    #[test]
    fn test_failure_does_not_evict() {
        let state = populated();
        let next = reducer().reduce(&state, &Fetch::request("items"));
        let next = reducer().reduce(
            &next,
            &Fetch::failed("items", FetchError::new("timeout").with_status(504)),
        );

        assert!(!is_fetching(&next));
        assert_eq!(error(&next).and_then(|e| e.status), Some(504));
        assert_eq!(
            item_by_id(&next, &EntityKey::slug("p1")).map(|item| item.title),
            Some("One")
        );
        assert_eq!(next.last_fetched, state.last_fetched);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let state = reducer().reduce(&populated(), &Fetch::failed("items", FetchError::new("boom")));
        let next = reducer().reduce(&state, &Fetch::received("items", vec![item("p1", "One")]));
        assert_eq!(error(&next), None);
    }

    #[test]
    fn test_status_flag_sequences() {
        let r = reducer();

        let started = r.reduce(&empty(), &Fetch::request("items"));
        let started_twice = r.reduce(&started, &Fetch::request("items"));
        assert!(is_fetching(&started_twice));

        let done = r.reduce(&started_twice, &Fetch::received("items", vec![item("a", "A")]));
        assert!(!is_fetching(&done));

        let started = r.reduce(&done, &Fetch::request_one("items", "b"));
        assert!(is_fetching(&started));
        let failed = r.reduce(&started, &Fetch::failed("items", FetchError::new("nope")));
        assert!(!is_fetching(&failed));
        assert!(error(&failed).is_some());
    }

    #[test]
    fn test_applied_action_is_deterministic() {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let action = Fetch::received("items", vec![item("a", "A")]).completed_at(at);
        let state = empty();

        let first = reducer().reduce(&state, &action);
        let second = reducer().reduce(&state, &action);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let r = reducer();
        let state = r.reduce(&empty(), &Fetch::request("items").for_request(RequestId(1)));
        let state = r.reduce(&state, &Fetch::request("items").for_request(RequestId(2)));

        let stale = r.reduce(
            &state,
            &Fetch::received("items", vec![item("old", "Old")]).for_request(RequestId(1)),
        );
        assert!(Arc::ptr_eq(&state, &stale));
        assert!(is_fetching(&stale));

        let fresh = r.reduce(
            &stale,
            &Fetch::received("items", vec![item("new", "New")]).for_request(RequestId(2)),
        );
        assert_eq!(titles(&fresh), vec!["New"]);
        assert!(!is_fetching(&fresh));
    }

    #[test]
    fn test_list_and_single_requests_are_ordered_separately() {
        let r = reducer();
        let state = r.reduce(&populated(), &Fetch::request("items").for_request(RequestId(1)));
        let state = r.reduce(
            &state,
            &Fetch::request_one("items", "p9").for_request(RequestId(2)),
        );

        // The single-entity request does not supersede the list request
        let state = r.reduce(
            &state,
            &Fetch::received("items", vec![item("p1", "One"), item("p2", "Two")])
                .for_request(RequestId(1)),
        );
        assert_eq!(titles(&state), vec!["One", "Two"]);
        assert!(!is_fetching(&state));

        // Nor the other way round
        let state = r.reduce(&state, &Fetch::request("items").for_request(RequestId(3)));
        let state = r.reduce(
            &state,
            &Fetch::received_one("items", item("p9", "Nine")).for_request(RequestId(2)),
        );
        assert_eq!(titles(&state), vec!["One", "Two", "Nine"]);

        // An older single-entity response for the same key is still dropped
        let state = r.reduce(
            &state,
            &Fetch::request_one("items", "p1").for_request(RequestId(5)),
        );
        let stale = r.reduce(
            &state,
            &Fetch::received_one("items", item("p1", "One v0")).for_request(RequestId(4)),
        );
        assert!(Arc::ptr_eq(&state, &stale));
    }

    #[test]
    fn test_key_consistency_over_mixed_sequence() {
        let r = reducer().with_extension(rename_extension);
        let actions = vec![
            Fetch::request("items"),
            Fetch::received("items", vec![item("a", "A"), item("b", "B"), item("a", "A2")]),
            Fetch::request_one("items", "c"),
            Fetch::received_one("items", item("c", "C")),
            Fetch::failed("items", FetchError::new("down")),
            Fetch::received_one("items/rename", item("b", "B2")),
            Fetch::received_one("items/rename", item("zz", "?")),
            Fetch::request("unknown"),
            Fetch::received("items", vec![item("d", "D"), item("c", "C2")]),
            Fetch::received_one("items", item("a", "A3")),
            Fetch::request("items").for_request(RequestId(2)),
            Fetch::received("items", vec![item("e", "E")]).for_request(RequestId(1)),
            Fetch::received("items", Vec::new()),
        ];

        let mut state = empty();
        for action in &actions {
            state = r.reduce(&state, action);
            assert_eq!(state.check_invariants(), Ok(()), "after {:?}", action);
        }
        assert!(titles(&state).is_empty());
        assert_eq!(
            item_by_id(&state, &EntityKey::slug("b")).map(|item| item.title),
            Some("B2")
        );
    }

    #[test]
    fn test_untagged_responses_are_last_write_wins() {
        let r = reducer();
        let state = r.reduce(&empty(), &Fetch::request("items"));
        let state = r.reduce(&state, &Fetch::request("items"));
        let state = r.reduce(&state, &Fetch::received("items", vec![item("new", "New")]));
        let state = r.reduce(&state, &Fetch::received("items", vec![item("old", "Old")]));
        assert_eq!(titles(&state), vec!["Old"]);
    }

    fn rename_extension(
        state: &CollectionState<Item>,
        action: &Fetch<Item>,
    ) -> Option<CollectionState<Item>> {
        if action.action_type != "items/rename" {
            return None;
        }
        let Payload::Entity(renamed) = &action.payload else {
            return None;
        };
        state.with_entity_updated(&EntityKey::slug(renamed.slug), |_| renamed.clone())
    }

    #[test]
    fn test_extension_sees_unrecognized_actions() {
        let r = reducer().with_extension(rename_extension);
        let state = populated();

        let next = r.reduce(&state, &Fetch::received_one("items/rename", item("p2", "Deux")));
        assert_eq!(titles(&next), vec!["One", "Deux"]);

        // Extension declines: same state
        let next = r.reduce(&state, &Fetch::request("unrelated"));
        assert!(Arc::ptr_eq(&state, &next));

        // Unknown key: same state
        let next = r.reduce(&state, &Fetch::received_one("items/rename", item("zz", "?")));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_extension_does_not_see_own_action_type() {
        fn hijack(
            state: &CollectionState<Item>,
            _action: &Fetch<Item>,
        ) -> Option<CollectionState<Item>> {
            Some(CollectionState {
                all_ids: Vec::new(),
                ..state.clone()
            })
        }

        let r = reducer().with_extension(hijack);
        let next = r.reduce(&empty(), &Fetch::received("items", vec![item("a", "A")]));
        assert_eq!(titles(&next), vec!["A"]);
    }

    #[test]
    fn test_key_field() {
        assert_eq!(reducer().key_field(), KeyField::Slug);
        let by_id: CollectionReducer<u64, Fetch<u64>> = CollectionReducer::by_id("n", |n| *n);
        assert_eq!(by_id.key_field(), KeyField::Id);
        assert_eq!(by_id.action_type(), "n");
    }
}
