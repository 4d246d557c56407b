use std::cmp::Ordering;

use crate::domain::entities::product::Product;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Title,
    Brand,
    Category,
    Price,
}

impl SortKey {
    pub fn all() -> [SortKey; 4] {
        [
            SortKey::Title,
            SortKey::Brand,
            SortKey::Category,
            SortKey::Price,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Brand => "Brand",
            SortKey::Category => "Category",
            SortKey::Price => "Price",
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Brand => a.brand.cmp(&b.brand),
            SortKey::Category => a.category.cmp(&b.category),
            SortKey::Price => a.price.total_cmp(&b.price),
        }
    }
}

/// Sort key and page position driving the rendered table. Pages are 1-based;
/// the upper bound is enforced by the navigation controls, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableQuery {
    pub sort_key: SortKey,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        TableQuery {
            sort_key: SortKey::Price,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableQuery {
    /// Replaces the sort key. The current page is kept, so the rows shown on
    /// it change under the new ordering.
    pub fn select_sort(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Switching page size always restarts from the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<Product>,
    pub total_rows: usize,
    pub total_pages: usize,
}
