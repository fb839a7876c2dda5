//! REST-backed catalog implementation.

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, instrument};

use fincat_core::{CatalogUrl, Product, ProductId, ProductRepository, Result};

use crate::client::RestClient;
use crate::entity::{DataEnvelope, ProductEntity};

/// A network-backed catalog over the product REST API.
#[derive(Debug, Clone)]
pub struct RestRepository {
    catalog: CatalogUrl,
    client: RestClient,
}

impl RestRepository {
    /// Create a new REST repository for the given catalog URL.
    pub fn new(catalog: CatalogUrl) -> Self {
        let client = RestClient::new(catalog.clone());
        Self { catalog, client }
    }

    /// Returns the catalog URL for this instance.
    pub fn url(&self) -> &CatalogUrl {
        &self.catalog
    }

    fn products_url(&self) -> Url {
        self.catalog.endpoint(&["bp", "products"])
    }

    fn product_url(&self, id: &str) -> Url {
        self.catalog.endpoint(&["bp", "products", id])
    }

    fn verification_url(&self, id: &str) -> Url {
        self.catalog.endpoint(&["bp", "products", "verification", id])
    }
}

#[async_trait]
impl ProductRepository for RestRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>> {
        debug!("Listing products via REST");

        let response: DataEnvelope<Vec<ProductEntity>> =
            self.client.get(self.products_url()).await?;

        response
            .data
            .into_iter()
            .map(ProductEntity::into_product)
            .collect()
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &ProductId) -> Result<Product> {
        debug!(id = %id, "Fetching product via REST");

        let entity: ProductEntity = self.client.get(self.product_url(id.as_str())).await?;

        entity.into_product()
    }

    #[instrument(skip(self, product))]
    async fn create(&self, product: &Product) -> Result<Product> {
        debug!(id = %product.id, "Creating product via REST");

        let entity = ProductEntity::from(product);
        let response: DataEnvelope<ProductEntity> =
            self.client.post(self.products_url(), &entity).await?;

        response.data.into_product()
    }

    #[instrument(skip(self, product))]
    async fn update(&self, id: &ProductId, product: &Product) -> Result<Product> {
        debug!(id = %id, "Updating product via REST");

        let entity = ProductEntity::from(product);
        let response: DataEnvelope<ProductEntity> =
            self.client.put(self.product_url(id.as_str()), &entity).await?;

        response.data.into_product()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &ProductId) -> Result<()> {
        debug!(id = %id, "Deleting product via REST");

        self.client.delete(self.product_url(id.as_str())).await
    }

    #[instrument(skip(self))]
    async fn verify_id_exists(&self, id: &str) -> Result<bool> {
        debug!(id, "Verifying product id via REST");

        self.client.get(self.verification_url(id)).await
    }
}
