//! 内存产品存储

use async_trait::async_trait;
use std::sync::RwLock;

use super::repository::{ProductRepository, RepositoryError};
use crate::app::products::model::{NewProduct, Product, DESCRIPTION_MAX_CHARS};

/// 按插入顺序保存产品，id 从 1 开始；描述长度上限与 PostgreSQL 表一致。
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Unavailable("product store lock poisoned".to_string())
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        if let Some(description) = &product.description {
            let chars = description.chars().count();
            if chars > DESCRIPTION_MAX_CHARS {
                return Err(RepositoryError::Constraint(format!(
                    "description has {} characters, at most {} allowed",
                    chars, DESCRIPTION_MAX_CHARS
                )));
            }
        }

        let mut products = self.products.write().map_err(poisoned)?;
        let id = products.last().map_or(1, |last| last.id + 1);
        let product = product.into_product(id);
        products.push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryProductRepository::new();

        let first = repo
            .save(NewProduct::new("Lamp", Decimal::new(1999, 2), None))
            .await
            .unwrap();
        let second = repo
            .save(NewProduct::new("Desk", Decimal::new(25000, 2), Some("oak".into())))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.description.as_deref(), Some("oak"));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryProductRepository::new();
        let saved = repo
            .save(NewProduct::new("Lamp", Decimal::new(1999, 2), None).with_status(false))
            .await
            .unwrap();

        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        for name in ["c", "a", "b"] {
            repo.save(NewProduct::new(name, Decimal::ONE, None)).await.unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_description_length_bound() {
        let repo = InMemoryProductRepository::new();

        let longest = "é".repeat(DESCRIPTION_MAX_CHARS);
        repo.save(NewProduct::new("Lamp", Decimal::ONE, Some(longest)))
            .await
            .unwrap();

        let too_long = "d".repeat(DESCRIPTION_MAX_CHARS + 1);
        let err = repo
            .save(NewProduct::new("Desk", Decimal::ONE, Some(too_long)))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
