//! Actions module
//!
//! Actions are tagged by the record type they carry. Fetch actions for the
//! same record type (e.g. top level categories and the categories nested in the
//! product slice) share a variant and are told apart by their action type.

pub mod action_type;
pub mod extension;
pub mod fetch;

pub use extension::{TermsLoaded, VariationsLoaded};
pub use fetch::{AsFetch, ErrorUpdate, Fetch, Payload, RequestId};

use crate::domain_models::{
    Account, Attribute, Category, Country, Order, Page, Post, Product, Sale,
};

/// Root action enum - tagged by record type
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Product fetch lifecycle
    Product(Fetch<Product>),
    /// Category fetch lifecycle (`categories` and `products/categories`)
    Category(Fetch<Category>),
    /// Attribute fetch lifecycle (`attributes` and `products/attributes`)
    Attribute(Fetch<Attribute>),
    Post(Fetch<Post>),
    Page(Fetch<Page>),
    Account(Fetch<Account>),
    Order(Fetch<Order>),
    Sale(Fetch<Sale>),
    Country(Fetch<Country>),

    /// Merge a variation list into one product
    ProductVariations(VariationsLoaded),
    /// Merge a term list into one attribute
    AttributeTerms(TermsLoaded),

    /// Action type nobody handles; a no-op for every slice
    Unknown(String),
}

impl Action {
    /// The action type string, as it appears on the wire
    pub fn action_type(&self) -> &str {
        match self {
            Action::Product(f) => f.action_type,
            Action::Category(f) => f.action_type,
            Action::Attribute(f) => f.action_type,
            Action::Post(f) => f.action_type,
            Action::Page(f) => f.action_type,
            Action::Account(f) => f.action_type,
            Action::Order(f) => f.action_type,
            Action::Sale(f) => f.action_type,
            Action::Country(f) => f.action_type,
            Action::ProductVariations(_) => action_type::PRODUCT_VARIATIONS,
            Action::AttributeTerms(_) => action_type::ATTRIBUTE_TERMS,
            Action::Unknown(action_type) => action_type,
        }
    }
}

macro_rules! impl_as_fetch {
    ($($variant:ident => $record:ty),* $(,)?) => {
        $(
            impl AsFetch<$record> for Action {
                fn as_fetch(&self) -> Option<&Fetch<$record>> {
                    match self {
                        Action::$variant(fetch) => Some(fetch),
                        _ => None,
                    }
                }
            }

            impl From<Fetch<$record>> for Action {
                fn from(fetch: Fetch<$record>) -> Self {
                    Action::$variant(fetch)
                }
            }
        )*
    };
}

impl_as_fetch! {
    Product => Product,
    Category => Category,
    Attribute => Attribute,
    Post => Post,
    Page => Page,
    Account => Account,
    Order => Order,
    Sale => Sale,
    Country => Country,
}
