pub mod account_reducer;
pub mod app_reducer;
pub mod attribute_reducer;
pub mod category_reducer;
pub mod collection_reducer;
pub mod country_reducer;
pub mod order_reducer;
pub mod page_reducer;
pub mod post_reducer;
pub mod product_reducer;
pub mod sale_reducer;

pub use collection_reducer::{CollectionReducer, Extension};
