//! Catalog records and the state derived from them.

mod list;
mod pagination;
pub(crate) mod product;

pub use list::{DEFAULT_PAGE_SIZE, ProductList};
pub use pagination::{Page, paginate_and_filter};
pub use product::{Product, revision_date_for};
