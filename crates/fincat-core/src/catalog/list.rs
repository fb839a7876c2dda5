//! List screen state.
//!
//! [`ProductList`] owns the loaded record set and the page derived from it.
//! Search resets to the first page, page changes are guarded against the
//! current page count, and deletion goes through an explicit confirmation
//! step. Derived state is replaced atomically on every mutation.

use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::{debug, instrument};

use super::pagination::{Page, paginate_and_filter};
use super::product::Product;
use crate::repository::ProductRepository;

/// Page size used when none is chosen.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// State behind the catalog list view.
pub struct ProductList {
    repo: Arc<dyn ProductRepository>,
    all_products: Vec<Product>,
    page: usize,
    page_size: NonZeroUsize,
    search_term: String,
    current: Page<Product>,
    error_message: Option<String>,
    pending_delete: Option<Product>,
}

impl ProductList {
    /// Create an empty list bound to a catalog backend.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self {
            repo,
            all_products: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: String::new(),
            current: paginate_and_filter(&[], 1, DEFAULT_PAGE_SIZE, ""),
            error_message: None,
            pending_delete: None,
        }
    }

    /// Load (or reload) the catalog and recompute the current page.
    ///
    /// On failure the normalized message is kept for display and the page
    /// is recomputed over an empty set.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.error_message = None;
        match self.repo.list().await {
            Ok(products) => {
                debug!(count = products.len(), "catalog loaded");
                self.all_products = products;
            }
            Err(err) => {
                debug!(error = %err, "catalog load failed");
                self.error_message = Some(err.message().to_string());
                self.all_products = Vec::new();
            }
        }
        self.refresh();
    }

    /// Set the search term (kept untrimmed) and go back to the first page.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
        self.refresh();
    }

    /// Switch to `page` if it lies within the current page count.
    ///
    /// Out-of-range requests are ignored; with an empty result set every
    /// request is out of range.
    pub fn set_page(&mut self, page: usize) {
        if page >= 1 && page <= self.current.total_pages {
            self.page = page;
            self.refresh();
        }
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, size: NonZeroUsize) {
        self.page_size = size;
        self.page = 1;
        self.refresh();
    }

    /// Select a product for deletion, pending confirmation.
    pub fn request_delete(&mut self, product: Product) {
        self.pending_delete = Some(product);
    }

    /// Drop the pending delete selection.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the selected product.
    ///
    /// On success the selection is cleared and the catalog reloaded; on
    /// failure the message is kept for display and the selection retained
    /// so the confirmation can be retried or cancelled.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&mut self) {
        let Some(product) = self.pending_delete.clone() else {
            return;
        };
        match self.repo.delete(&product.id).await {
            Ok(()) => {
                debug!(id = %product.id, "product deleted");
                self.pending_delete = None;
                self.load().await;
            }
            Err(err) => {
                debug!(error = %err, id = %product.id, "delete failed");
                self.error_message = Some(err.message().to_string());
            }
        }
    }

    /// The page currently shown.
    pub fn page(&self) -> &Page<Product> {
        &self.current
    }

    /// The raw (untrimmed) search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Message from the most recent failed operation, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The product selected for deletion, if a confirmation is pending.
    pub fn pending_delete(&self) -> Option<&Product> {
        self.pending_delete.as_ref()
    }

    /// Every loaded product, unfiltered.
    pub fn all_products(&self) -> &[Product] {
        &self.all_products
    }

    fn refresh(&mut self) {
        self.current = paginate_and_filter(
            &self.all_products,
            self.page,
            self.page_size,
            &self.search_term,
        );
    }
}
