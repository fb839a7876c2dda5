//! fincat-core - Model and behavior of the fincat product catalog manager.
//!
//! Holds the catalog data model, the pure pagination/filtering engine, the
//! list and form state machines, and the backend trait the rest of the
//! workspace implements. Nothing in this crate touches the network or the
//! filesystem.

pub mod catalog;
pub mod error;
pub mod form;
pub mod repository;
pub mod types;

#[cfg(test)]
mod test_support;

pub use catalog::{
    DEFAULT_PAGE_SIZE, Page, Product, ProductList, paginate_and_filter, revision_date_for,
};
pub use error::DomainError;
pub use form::{Field, FieldError, FormMode, ProductForm, SubmitBlock, SubmitOutcome};
pub use repository::ProductRepository;
pub use types::{CatalogUrl, ProductId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, DomainError>;
