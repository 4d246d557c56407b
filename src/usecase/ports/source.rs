use async_trait::async_trait;

use crate::domain::entities::product::Product;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed product payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the full product list. Called once at startup, never retried.
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError>;
}
