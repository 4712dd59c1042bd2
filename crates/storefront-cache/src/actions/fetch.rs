//! Fetch actions
//!
//! A `Fetch` is the plain record the network layer dispatches for one entity
//! kind: request start, success (full list or single entity) or failure.
//!
//! Requests can optionally be tagged with a [`RequestId`]. Without a tag,
//! completions are applied in dispatch order, so a slow response for an older
//! request overwrites a newer one (last write wins). With tags, a completion
//! older than the latest tagged request start for the same target (the full
//! list, or one entity key) is dropped by the reducer.

use chrono::{DateTime, Utc};

use crate::domain_models::{EntityKey, FetchError};

/// Identity of one outgoing request, ordered by issue time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// How an action changes the collection's error slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorUpdate {
    /// Leave the previous error in place
    #[default]
    Keep,
    /// Explicitly reset the error
    Clear,
    /// Replace the error
    Set(FetchError),
}

/// Records carried by a fetch action
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload<T> {
    /// Nothing (request start of a list, or failure)
    #[default]
    None,
    /// Key of a single entity being requested
    Key(EntityKey),
    /// A single entity (single-entity success)
    Entity(T),
    /// The complete, ordered list (full-list success)
    Items(Vec<T>),
}

impl<T> Payload<T> {
    /// Whether the payload carries records
    pub fn has_records(&self) -> bool {
        matches!(self, Self::Entity(_) | Self::Items(_))
    }
}

/// A fetch lifecycle action for one entity kind
#[derive(Debug, Clone, PartialEq)]
pub struct Fetch<T> {
    /// Entity kind this action targets
    pub action_type: &'static str,
    /// True while the request is outstanding
    pub is_fetching: bool,
    pub error: ErrorUpdate,
    pub payload: Payload<T>,
    /// When the response arrived; stamped by the caller, never by the reducer
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional request tag used to drop out of order responses
    pub request: Option<RequestId>,
}

impl<T> Fetch<T> {
    /// A full-list request has started
    pub fn request(action_type: &'static str) -> Self {
        Self {
            action_type,
            is_fetching: true,
            error: ErrorUpdate::Keep,
            payload: Payload::None,
            completed_at: None,
            request: None,
        }
    }

    /// A single-entity request has started
    pub fn request_one(action_type: &'static str, key: impl Into<EntityKey>) -> Self {
        Self {
            payload: Payload::Key(key.into()),
            ..Self::request(action_type)
        }
    }

    /// A full-list request succeeded
    pub fn received(action_type: &'static str, items: Vec<T>) -> Self {
        Self {
            action_type,
            is_fetching: false,
            error: ErrorUpdate::Clear,
            payload: Payload::Items(items),
            completed_at: Some(Utc::now()),
            request: None,
        }
    }

    /// A single-entity request succeeded
    pub fn received_one(action_type: &'static str, entity: T) -> Self {
        Self {
            payload: Payload::Entity(entity),
            ..Self::received(action_type, Vec::new())
        }
    }

    /// A request failed
    pub fn failed(action_type: &'static str, error: FetchError) -> Self {
        Self {
            action_type,
            is_fetching: false,
            error: ErrorUpdate::Set(error),
            payload: Payload::None,
            completed_at: None,
            request: None,
        }
    }

    /// Reset a previous error when this action is applied
    pub fn clearing_error(mut self) -> Self {
        self.error = ErrorUpdate::Clear;
        self
    }

    /// Override the completion time
    pub fn completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = Some(at);
        self
    }

    /// Tag this action with the request it belongs to
    pub fn for_request(mut self, request: RequestId) -> Self {
        self.request = Some(request);
        self
    }
}

/// Access to the fetch record of an action, if it carries one for `T`
///
/// Implemented by the application's action enum so the generic collection
/// reducer can run against it, and by `Fetch<T>` itself.
pub trait AsFetch<T> {
    fn as_fetch(&self) -> Option<&Fetch<T>>;
}

impl<T> AsFetch<T> for Fetch<T> {
    fn as_fetch(&self) -> Option<&Fetch<T>> {
        Some(self)
    }
}
