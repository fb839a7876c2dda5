//! Validated catalog value types.
//!
//! These types enforce their invariants at construction time, so invalid
//! states are unrepresentable further in.

mod catalog_url;
mod product_id;

pub use catalog_url::CatalogUrl;
pub use product_id::{MAX_ID_LENGTH, MIN_ID_LENGTH, ProductId};
