//! Domain models
//!
//! Entity records cached by the storefront, plus the key and error types
//! shared by every collection. Records are opaque to the cache itself.

pub mod account;
pub mod attribute;
pub mod category;
pub mod country;
pub mod entity_key;
pub mod fetch_error;
pub mod order;
pub mod page;
pub mod post;
pub mod product;
pub mod sale;

pub use account::Account;
pub use attribute::{Attribute, AttributeTerm};
pub use category::Category;
pub use country::{Country, Region};
pub use entity_key::{EntityKey, KeyField};
pub use fetch_error::FetchError;
pub use order::Order;
pub use page::Page;
pub use post::Post;
pub use product::{Product, Variation, VariationOption};
pub use sale::Sale;
