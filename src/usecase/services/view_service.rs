use crate::domain::entities::product::Product;
use crate::domain::entities::view::{SortKey, TablePage, TableQuery};

/// Returns a new vector ordered ascending by `key`. The input is untouched.
/// Equal keys keep their relative order.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// Slices one 1-based page out of an already ordered list. Pages past the end
/// come back empty; clamping the page index is the caller's job.
pub fn paginate(products: &[Product], page: usize, page_size: usize) -> TablePage {
    assert!(page_size > 0, "page size must be greater than zero");
    let total_rows = products.len();
    let total_pages = total_rows.div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total_rows);
    let end = start.saturating_add(page_size).min(total_rows);
    TablePage {
        rows: products[start..end].to_vec(),
        total_rows,
        total_pages,
    }
}

/// Sort then slice, recomputed from scratch on every render.
pub fn build_table_page(products: &[Product], query: &TableQuery) -> TablePage {
    let sorted = sort_products(products, query.sort_key);
    paginate(&sorted, query.page, query.page_size)
}
