//! Application state
//!
//! The whole cache is one immutable tree of slices. Each slice sits behind an
//! `Arc` so an action that does not touch a slice keeps the same pointer,
//! which callers use for cheap change detection.

pub mod collection;
pub mod product;

pub use collection::{CollectionState, InvariantError};
pub use product::ProductState;

use std::sync::Arc;

use crate::domain_models::{Account, Attribute, Category, Country, Order, Page, Post, Sale};

/// Root state - one slice per domain
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub products: Arc<ProductState>,
    pub categories: Arc<CollectionState<Category>>,
    pub attributes: Arc<CollectionState<Attribute>>,
    pub posts: Arc<CollectionState<Post>>,
    pub pages: Arc<CollectionState<Page>>,
    pub accounts: Arc<CollectionState<Account>>,
    pub orders: Arc<CollectionState<Order>>,
    pub sales: Arc<CollectionState<Sale>>,
    pub countries: Arc<CollectionState<Country>>,
}
