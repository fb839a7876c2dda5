//! File-backed catalog implementation.

use std::path::Path;

use async_trait::async_trait;

use fincat_core::{CatalogUrl, DomainError, Product, ProductId, ProductRepository, Result};

use crate::store::FileStore;

fn not_found(id: &str) -> DomainError {
    DomainError::new(format!("Product '{id}' was not found."))
}

/// Filesystem-backed catalog implementation.
#[derive(Debug, Clone)]
pub struct FileRepository {
    store: FileStore,
    url: CatalogUrl,
}

impl FileRepository {
    /// Create a new file-backed catalog at the given root directory.
    pub fn new(root: impl AsRef<Path>, url: CatalogUrl) -> Self {
        Self {
            store: FileStore::new(root),
            url,
        }
    }

    /// Open the catalog a `file://` URL points at.
    pub fn open(url: &CatalogUrl) -> Result<Self> {
        let root = url.to_file_path().ok_or_else(|| {
            DomainError::new(format!(
                "Catalog URL '{url}' does not point at a local directory."
            ))
        })?;

        Ok(Self {
            store: FileStore::new(root),
            url: url.clone(),
        })
    }

    /// Returns the catalog URL for this instance.
    pub fn url(&self) -> &CatalogUrl {
        &self.url
    }
}

#[async_trait]
impl ProductRepository for FileRepository {
    async fn list(&self) -> Result<Vec<Product>> {
        self.store.read_all()
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product> {
        self.store
            .read(id.as_str())?
            .ok_or_else(|| not_found(id.as_str()))
    }

    async fn create(&self, product: &Product) -> Result<Product> {
        self.store.insert(product)?;
        Ok(product.clone())
    }

    async fn update(&self, id: &ProductId, product: &Product) -> Result<Product> {
        self.store.replace(id.as_str(), product)?;
        Ok(product.clone())
    }

    async fn delete(&self, id: &ProductId) -> Result<()> {
        self.store.remove(id.as_str())
    }

    async fn verify_id_exists(&self, id: &str) -> Result<bool> {
        Ok(self.store.exists(id))
    }
}
