//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ReplaceProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Every operation addressing an id looks the product up first and fails with
/// [`ProductError::NotFound`] when it is absent.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn replace_product(&self, id: i32, input: ReplaceProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.get_product(id).await?;
        self.repository
            .replace(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        self.get_product(id).await?;
        self.repository
            .toggle_availability(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        self.get_product(id).await?;
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn product(id: i32) -> Product {
        let now = Utc::now();
        Product {
            id,
            name: "Mouse".into(),
            price: 40.0,
            availability: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().with(eq(2000)).returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.get_product(2000).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(2000)));
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_price_without_store_call() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();

        let service = ProductService::new(repo);
        let err = service
            .create_product(CreateProduct {
                name: "Mouse".into(),
                price: 0.0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_replace_checks_existence_first() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_replace().never();

        let service = ProductService::new(repo);
        let input = ReplaceProduct {
            name: "Mouse".into(),
            price: 40.0,
            availability: false,
        };
        let err = service.replace_product(7, input).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(7)));
    }

    #[tokio::test]
    async fn test_toggle_returns_updated_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|id| Ok(Some(product(id))));
        repo.expect_toggle_availability().with(eq(3)).returning(|id| {
            let mut p = product(id);
            p.availability = false;
            Ok(Some(p))
        });

        let service = ProductService::new(repo);
        let toggled = service.toggle_availability(3).await.unwrap();
        assert!(!toggled.availability);
    }

    #[tokio::test]
    async fn test_delete_existing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|id| Ok(Some(product(id))));
        repo.expect_delete().with(eq(1)).times(1).returning(|_| Ok(true));

        let service = ProductService::new(repo);
        assert!(service.delete_product(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .returning(|| Err(ProductError::Internal("pool closed".into())));

        let service = ProductService::new(repo);
        assert!(service.list_products().await.is_err());
    }
}
