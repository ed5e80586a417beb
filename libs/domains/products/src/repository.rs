use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ReplaceProduct};

/// Repository trait for Product persistence
///
/// Each call maps to a single store round-trip. A missing row is reported as
/// `None`/`false`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; availability starts as `true`
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// All products ordered by id
    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Overwrite name, price and availability
    async fn replace(&self, id: i32, input: ReplaceProduct) -> ProductResult<Option<Product>>;

    /// Flip availability, leaving other fields untouched
    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>>;

    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    products: BTreeMap<i32, Product>,
}

/// Process-local repository for development and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let now = Utc::now();
        let product = Product {
            id: store.next_id,
            name: input.name,
            price: input.price,
            availability: true,
            created_at: now,
            updated_at: now,
        };
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.store.read().await.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        Ok(self.store.read().await.products.get(&id).cloned())
    }

    async fn replace(&self, id: i32, input: ReplaceProduct) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;
        Ok(store.products.get_mut(&id).map(|product| {
            product.name = input.name;
            product.price = input.price;
            product.availability = input.availability;
            product.updated_at = Utc::now();
            product.clone()
        }))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;
        Ok(store.products.get_mut(&id).map(|product| {
            product.availability = !product.availability;
            product.updated_at = Utc::now();
            product.clone()
        }))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        Ok(self.store.write().await.products.remove(&id).is_some())
    }
}
