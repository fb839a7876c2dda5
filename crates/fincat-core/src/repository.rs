//! The catalog backend trait.

use async_trait::async_trait;

use crate::Result;
use crate::catalog::Product;
use crate::types::ProductId;

/// A product catalog backend.
///
/// The core drives every persistence operation through this trait and is
/// injected with an implementation at construction time. Implementations
/// must hand back failures already normalized to [`crate::DomainError`]
/// with a display-ready message; the core never looks past the message.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product in the catalog.
    async fn list(&self) -> Result<Vec<Product>>;

    /// Fetch a single product by id.
    async fn get_by_id(&self, id: &ProductId) -> Result<Product>;

    /// Create a new product, returning the stored record.
    async fn create(&self, product: &Product) -> Result<Product>;

    /// Replace an existing product, returning the stored record.
    async fn update(&self, id: &ProductId, product: &Product) -> Result<Product>;

    /// Delete a product.
    async fn delete(&self, id: &ProductId) -> Result<()>;

    /// Check whether an id is already taken.
    ///
    /// Takes a raw string rather than a [`ProductId`]: this is a
    /// pre-validation probe and must accept values that are not valid ids.
    async fn verify_id_exists(&self, id: &str) -> Result<bool>;
}
