//! Post Reducer

use std::sync::Arc;

use super::collection_reducer::CollectionReducer;
use crate::actions::{action_type, Action};
use crate::domain_models::Post;
use crate::state::CollectionState;

pub fn reducer() -> CollectionReducer<Post, Action> {
    CollectionReducer::by_slug(action_type::POSTS, Post::slug)
}

pub fn reduce(state: &Arc<CollectionState<Post>>, action: &Action) -> Arc<CollectionState<Post>> {
    reducer().reduce(state, action)
}
