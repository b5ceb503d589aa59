//! 产品数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Longest description storage accepts, in characters (`VARCHAR(1000)`).
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// 已持久化的产品，`id` 由存储分配且不再改变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub status: bool,
}

/// 尚未保存的产品
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub status: bool,
}

impl NewProduct {
    /// New active product.
    pub fn new(name: impl Into<String>, price: Decimal, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description,
            status: true,
        }
    }

    pub fn with_status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    pub(crate) fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            status: self.status,
        }
    }
}
