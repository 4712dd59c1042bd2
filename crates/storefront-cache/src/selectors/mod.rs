//! Selectors
//!
//! Pure read functions over the cache. Consumers never look at the index
//! fields directly.

pub mod collection;
pub mod product;
pub mod root;
pub mod wrap;

pub use collection::{all_items, contains, error, is_fetching, item_by_id, last_fetched};
pub use wrap::{wrap, wrap_with};
