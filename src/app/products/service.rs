//! 产品业务服务

use std::sync::Arc;
use tracing::{debug, info};
use validator::ValidationErrors;

use super::model::NewProduct;
use super::request::ProductRequest;
use super::response::ProductEnvelope;
use crate::infrastructure::repository::{ProductRepository, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid product: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Product not found with ID: {0}")]
    NotFound(i64),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 产品服务：创建、查询、列表，除存储句柄外无状态
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new product; `status` defaults to active.
    pub async fn create(&self, request: ProductRequest) -> Result<ProductEnvelope, ServiceError> {
        let product = NewProduct::try_from(request)?;
        let product = self.repository.save(product).await?;
        info!("Created product: {} ({})", product.name, product.id);
        Ok(product.into())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<ProductEnvelope, ServiceError> {
        match self.repository.find_by_id(id).await? {
            Some(product) => Ok(product.into()),
            None => {
                debug!("product {} not found", id);
                Err(ServiceError::NotFound(id))
            }
        }
    }

    /// Every product in storage order. An empty store is not an error.
    pub async fn find_all(&self) -> Result<Vec<ProductEnvelope>, ServiceError> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductEnvelope::from).collect())
    }
}
