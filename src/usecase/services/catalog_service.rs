use std::sync::Arc;

use crate::domain::entities::product::Product;
use crate::usecase::ports::source::{ProductSource, SourceError};

pub struct CatalogService {
    source: Arc<dyn ProductSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        Self { source }
    }

    pub async fn load(&self) -> Result<Vec<Product>, SourceError> {
        self.source.fetch_products().await
    }
}
