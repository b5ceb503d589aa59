//! PostgreSQL 产品存储

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use super::repository::{ProductRepository, RepositoryError};
use crate::app::products::model::{NewProduct, Product};

const COLUMNS: &str = "id, name, price, description, status";

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn save(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let sql = format!(
            "INSERT INTO products (name, price, description, status) VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.description)
            .bind(product.status)
            .fetch_one(&self.pool)
            .await?;

        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", COLUMNS);

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {} FROM products ORDER BY id", COLUMNS);

        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }
}
