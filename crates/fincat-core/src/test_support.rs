//! Test doubles shared across unit tests.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::Result;
use crate::catalog::Product;
use crate::error::DomainError;
use crate::repository::ProductRepository;
use crate::types::ProductId;

/// Build a valid product with fixed logo and dates.
pub(crate) fn product(id: &str, name: &str, description: &str) -> Product {
    Product::new(
        ProductId::new(id).unwrap(),
        name,
        description,
        "https://example.com/logo.png",
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    )
}

/// A scriptable in-memory catalog backend.
///
/// Failures are injected per operation as the message the real backends
/// would have produced; verification calls are recorded for assertions on
/// debounce behavior.
#[derive(Default)]
pub(crate) struct MockRepository {
    pub products: Mutex<Vec<Product>>,
    pub taken_ids: Mutex<HashSet<String>>,
    pub verify_calls: Mutex<Vec<String>>,
    pub fail_list_with: Mutex<Option<String>>,
    pub fail_create_with: Mutex<Option<String>>,
    pub fail_update_with: Mutex<Option<String>>,
    pub fail_delete_with: Mutex<Option<String>>,
    pub fail_verify: AtomicBool,
    pub created: Mutex<Vec<Product>>,
    pub updated: Mutex<Vec<(ProductId, Product)>>,
}

impl MockRepository {
    pub fn with_products(products: Vec<Product>) -> Self {
        let mock = Self::default();
        *mock.products.lock().unwrap() = products;
        mock
    }

    pub fn mark_taken(&self, id: &str) {
        self.taken_ids.lock().unwrap().insert(id.to_string());
    }

    pub fn verify_calls(&self) -> Vec<String> {
        self.verify_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductRepository for MockRepository {
    async fn list(&self) -> Result<Vec<Product>> {
        if let Some(message) = self.fail_list_with.lock().unwrap().clone() {
            return Err(DomainError::new(message));
        }
        Ok(self.products.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == *id)
            .cloned()
            .ok_or_else(|| DomainError::new(format!("Product '{id}' was not found.")))
    }

    async fn create(&self, product: &Product) -> Result<Product> {
        if let Some(message) = self.fail_create_with.lock().unwrap().clone() {
            return Err(DomainError::new(message));
        }
        self.products.lock().unwrap().push(product.clone());
        self.created.lock().unwrap().push(product.clone());
        Ok(product.clone())
    }

    async fn update(&self, id: &ProductId, product: &Product) -> Result<Product> {
        if let Some(message) = self.fail_update_with.lock().unwrap().clone() {
            return Err(DomainError::new(message));
        }
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == *id) {
            Some(slot) => *slot = product.clone(),
            None => return Err(DomainError::new(format!("Product '{id}' was not found."))),
        }
        self.updated.lock().unwrap().push((id.clone(), product.clone()));
        Ok(product.clone())
    }

    async fn delete(&self, id: &ProductId) -> Result<()> {
        if let Some(message) = self.fail_delete_with.lock().unwrap().clone() {
            return Err(DomainError::new(message));
        }
        self.products.lock().unwrap().retain(|p| p.id != *id);
        Ok(())
    }

    async fn verify_id_exists(&self, id: &str) -> Result<bool> {
        self.verify_calls.lock().unwrap().push(id.to_string());
        if self.fail_verify.load(Ordering::SeqCst) {
            return Err(DomainError::new("Verification backend unreachable."));
        }
        let taken = self.taken_ids.lock().unwrap().contains(id)
            || self
                .products
                .lock()
                .unwrap()
                .iter()
                .any(|p| p.id.as_str() == id);
        Ok(taken)
    }
}
