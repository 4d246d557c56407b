use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::domain::entities::product::Product;
use crate::usecase::ports::source::{ProductSource, SourceError};

#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

/// Decodes the `{"products": [...]}` envelope, keeping only the fields the
/// table renders and ignoring the rest of the payload.
pub fn parse_products(body: &str) -> Result<Vec<Product>, serde_json::Error> {
    let envelope: ProductsEnvelope = serde_json::from_str(body)?;
    Ok(envelope.products)
}

pub struct DummyJsonSource {
    client: Client,
    products_url: String,
}

impl DummyJsonSource {
    pub fn new(config: &AppConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            products_url: config.api_url.clone(),
        })
    }
}

#[async_trait]
impl ProductSource for DummyJsonSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        tracing::debug!("request URL: {}", self.products_url);

        let response = self.client.get(&self.products_url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let body = response.text().await?;
        let products = parse_products(&body)?;

        tracing::info!("fetched {} products", products.len());
        Ok(products)
    }
}
