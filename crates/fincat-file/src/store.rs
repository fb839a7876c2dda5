//! Filesystem storage for the file-backed catalog.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument};

use fincat_core::{DomainError, Product, Result};

fn storage_error(err: std::io::Error) -> DomainError {
    DomainError::new(format!("Catalog storage error: {err}."))
}

/// Filesystem-backed storage for a local catalog.
///
/// Products live as one JSON file per product under `products/`, keyed by
/// product id. Mutations take an exclusive lock on `catalog.lock` so that
/// concurrent invocations do not interleave their writes.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the products directory.
    fn products_dir(&self) -> PathBuf {
        self.root.join("products")
    }

    /// Get the catalog lock file path.
    fn lock_path(&self) -> PathBuf {
        self.root.join("catalog.lock")
    }

    /// Convert a product id into a filesystem-safe file name.
    fn file_name(id: &str) -> String {
        // Path separators must not leak into the file name.
        let safe: String = id
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        format!("{safe}.json")
    }

    /// Get the path for a specific product.
    fn product_path(&self, id: &str) -> PathBuf {
        self.products_dir().join(Self::file_name(id))
    }

    /// Take the exclusive catalog lock for a mutation.
    fn lock(&self) -> Result<File> {
        fs::create_dir_all(&self.root).map_err(storage_error)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(storage_error)?;

        lock_file.lock_exclusive().map_err(storage_error)?;

        Ok(lock_file)
    }

    /// Write a product to the given path atomically.
    fn write_product(&self, path: &Path, product: &Product) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(storage_error)?;
        }

        let content = serde_json::to_string_pretty(product)
            .map_err(|err| DomainError::new(format!("Could not serialize product: {err}.")))?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(storage_error)?;
        fs::rename(&temp_path, path).map_err(storage_error)?;

        Ok(())
    }

    /// Read every product in the catalog, sorted by id.
    ///
    /// A missing catalog directory reads as an empty catalog. Files that do
    /// not hold a valid product are skipped.
    pub fn read_all(&self) -> Result<Vec<Product>> {
        let dir = self.products_dir();

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<_> = fs::read_dir(&dir)
            .map_err(storage_error)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            .collect();

        entries.sort_by_key(|e| e.file_name());

        let mut products = Vec::new();
        for entry in entries {
            let content = fs::read_to_string(entry.path()).map_err(storage_error)?;
            if let Ok(product) = serde_json::from_str::<Product>(&content) {
                products.push(product);
            }
        }

        Ok(products)
    }

    /// Read a single product, if it is stored.
    pub fn read(&self, id: &str) -> Result<Option<Product>> {
        let path = self.product_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(storage_error)?;
        let product = serde_json::from_str::<Product>(&content)
            .map_err(|err| DomainError::new(format!("Stored product '{id}' is unreadable: {err}.")))?;

        Ok(Some(product))
    }

    /// Returns true if a product with the given id is stored.
    pub fn exists(&self, id: &str) -> bool {
        self.product_path(id).exists()
    }

    /// Store a new product, failing if its id is already taken.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub fn insert(&self, product: &Product) -> Result<()> {
        let lock_file = self.lock()?;

        let path = self.product_path(product.id.as_str());
        if path.exists() {
            return Err(DomainError::new(format!(
                "A product with id '{}' already exists.",
                product.id
            )));
        }

        self.write_product(&path, product)?;

        lock_file.unlock().map_err(storage_error)?;

        debug!(id = %product.id, "Stored product");

        Ok(())
    }

    /// Replace a stored product, failing if the id is unknown.
    #[instrument(skip(self, product))]
    pub fn replace(&self, id: &str, product: &Product) -> Result<()> {
        let lock_file = self.lock()?;

        let path = self.product_path(id);
        if !path.exists() {
            return Err(DomainError::new(format!("Product '{id}' was not found.")));
        }

        self.write_product(&path, product)?;

        lock_file.unlock().map_err(storage_error)?;

        debug!(id, "Replaced product");

        Ok(())
    }

    /// Remove a stored product. Removing an absent id is a no-op.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<()> {
        let lock_file = self.lock()?;

        let path = self.product_path(id);
        if path.exists() {
            fs::remove_file(&path).map_err(storage_error)?;
            debug!(id, "Removed product");
        }

        lock_file.unlock().map_err(storage_error)?;

        Ok(())
    }
}
