//! 产品响应结构

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::Product;
use crate::core::response::Envelope;

/// Envelope discriminator for products.
pub const PRODUCT_TYPE: &str = "product";

/// 产品对外视图，不包含 `status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub description: Option<String>,
}

/// `{ "data": { "type": "product", "attributes": ProductResponse } }`
pub type ProductEnvelope = Envelope<ProductResponse>;

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

impl From<Product> for ProductEnvelope {
    fn from(product: Product) -> Self {
        Envelope::new(PRODUCT_TYPE, ProductResponse::from(product))
    }
}
