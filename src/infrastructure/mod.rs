//! 基础设施层：存储与日志

#[cfg(feature = "postgres")]
pub mod database;
pub mod logger;
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod repository;

use std::sync::Arc;

use crate::config::DatabaseConfig;
use memory::InMemoryProductRepository;
use repository::{ProductRepository, RepositoryError};

/// 根据配置选择产品存储
pub async fn connect_repository(
    config: &DatabaseConfig,
) -> Result<Arc<dyn ProductRepository>, RepositoryError> {
    match config.url.as_deref() {
        #[cfg(feature = "postgres")]
        Some(url) => {
            let manager = database::DatabaseManager::new(url, config).await?;
            manager.init_schema().await?;
            Ok(Arc::new(postgres::PgProductRepository::new(
                manager.get_pool().clone(),
            )))
        }
        #[cfg(not(feature = "postgres"))]
        Some(_) => Err(RepositoryError::Unavailable(
            "built without the postgres feature".to_string(),
        )),
        None => {
            tracing::warn!("no database url configured, products are kept in memory");
            Ok(Arc::new(InMemoryProductRepository::new()))
        }
    }
}
