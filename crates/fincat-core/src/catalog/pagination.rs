//! Pagination and filtering engine.
//!
//! A pure function of its inputs: the full record set, the requested page,
//! the page size and the search term go in, one page of results plus
//! pagination metadata comes out. Derived state is recomputed from scratch
//! on every call and never persisted.

use std::num::NonZeroUsize;

use serde::Serialize;

use super::product::Product;

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// The records on this page, in source order.
    pub items: Vec<T>,

    /// Count of records after filtering, across all pages.
    pub total: usize,

    /// The page actually shown, clamped to the valid range.
    pub current_page: usize,

    /// The page size the page was computed with.
    pub page_size: NonZeroUsize,

    /// Total page count for the filtered set; 0 when nothing matched.
    pub total_pages: usize,

    /// True when another page follows this one.
    pub has_next_page: bool,
}

/// Filter and paginate a record set.
///
/// Filtering is a case-insensitive substring match of `search_term` against
/// name or description; the empty string (not trimmed) disables filtering.
/// `page` is clamped to `1..=total_pages`, or to 1 when nothing matched.
/// A page size of zero is unrepresentable here; boundaries that parse page
/// sizes from user input reject zero before reaching the engine.
pub fn paginate_and_filter(
    records: &[Product],
    page: usize,
    page_size: NonZeroUsize,
    search_term: &str,
) -> Page<Product> {
    let filtered: Vec<&Product> = if search_term.is_empty() {
        records.iter().collect()
    } else {
        let needle = search_term.to_lowercase();
        records.iter().filter(|p| matches(p, &needle)).collect()
    };

    let size = page_size.get();
    let total = filtered.len();
    let total_pages = total.div_ceil(size);
    let current_page = page.max(1).min(total_pages.max(1));
    let start = (current_page - 1) * size;
    let end = start + size;

    let items = filtered
        .iter()
        .skip(start)
        .take(size)
        .map(|p| (*p).clone())
        .collect();

    Page {
        items,
        total,
        current_page,
        page_size,
        total_pages,
        has_next_page: end < total,
    }
}

fn matches(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}
