//! 产品存储接口

use async_trait::async_trait;

use crate::app::products::model::{NewProduct, Product};

/// 产品存储错误
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("constraint violated: {0}")]
    Constraint(String),
}

/// 产品服务对存储的要求。每次调用自身是原子的，不存在跨调用的事务。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 插入产品并返回带生成 id 的记录
    async fn save(&self, product: NewProduct) -> Result<Product, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;

    /// 按存储自身的顺序返回全部产品
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
