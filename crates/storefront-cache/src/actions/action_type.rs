//! Action type strings
//!
//! One constant per entity kind. Fetch actions carry the kind they target;
//! a collection only reacts to its own kind.

pub const PRODUCTS: &str = "products";
pub const PRODUCT_CATEGORIES: &str = "products/categories";
pub const PRODUCT_ATTRIBUTES: &str = "products/attributes";
pub const PRODUCT_VARIATIONS: &str = "products/variations";
pub const CATEGORIES: &str = "categories";
pub const ATTRIBUTES: &str = "attributes";
pub const ATTRIBUTE_TERMS: &str = "attributes/terms";
pub const POSTS: &str = "posts";
pub const PAGES: &str = "pages";
pub const ACCOUNTS: &str = "accounts";
pub const ORDERS: &str = "orders";
pub const SALES: &str = "sales";
pub const COUNTRIES: &str = "countries";
