use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[allow(dead_code)]
    pub id: ProductId,
    pub title: String,
    // Some catalog entries ship without a brand field.
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub price: f64,
}
