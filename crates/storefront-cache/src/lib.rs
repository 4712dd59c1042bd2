//! Client-side entity cache for a storefront
//!
//! This crate provides:
//! - Fetch lifecycle actions and their wire decoding
//! - A generic collection reducer, instantiated per entity kind
//! - Immutable, structurally shared state (one `Arc` per slice)
//! - Selectors, and `wrap` for rebasing them onto an enclosing state
//! - A store with a middleware chain and a dispatcher

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod middleware;
pub mod reducers;
pub mod selectors;
pub mod state;
pub mod store;
pub mod wire;

pub use actions::{Action, AsFetch, ErrorUpdate, Fetch, Payload, RequestId};
pub use dispatcher::Dispatcher;
pub use reducers::{CollectionReducer, Extension};
pub use state::{CollectionState, ProductState, RootState};
pub use store::Store;
