use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::entity::{ActiveModel, Column, Entity};
use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ReplaceProduct};
use crate::repository::ProductRepository;

/// PostgreSQL implementation of ProductRepository
///
/// Timestamps are filled by column defaults and the `updated_at` trigger.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        Self {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            availability: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let model: ActiveModel = input.into();
        let product: Product = model.insert(&self.db).await?.into();

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = Entity::find().order_by_asc(Column::Id).all(&self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let result = Entity::find_by_id(id).one(&self.db).await?.map(Into::into);
        Ok(result)
    }

    async fn replace(&self, id: i32, input: ReplaceProduct) -> ProductResult<Option<Product>> {
        let model = ActiveModel {
            id: Unchanged(id),
            name: Set(input.name),
            price: Set(input.price),
            availability: Set(input.availability),
            created_at: NotSet,
            updated_at: NotSet,
        };

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let updated = Entity::update_many()
            .col_expr(Column::Availability, Expr::cust(r#"NOT "availability""#))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await?;

        Ok(updated.into_iter().next().map(Into::into))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Model;
    use crate::error::ProductError;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, availability: bool) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            name: "Mouse".into(),
            price: 40.0,
            availability,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, true)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo
            .create(CreateProduct {
                name: "Mouse".into(),
                price: 40.0,
            })
            .await
            .unwrap();

        assert_eq!(product.id, 1);
        assert!(product.availability);
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, true), model(2, false)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert!(!products[1].availability);
    }

    #[tokio::test]
    async fn test_get_missing_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.get_by_id(2000).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_missing_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let input = ReplaceProduct {
            name: "Mouse".into(),
            price: 40.0,
            availability: true,
        };
        assert!(repo.replace(2000, input).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_toggle_returns_updated_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, false)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.toggle_availability(3).await.unwrap().unwrap();
        assert_eq!(product.id, 3);
        assert!(!product.availability);
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_store_errors_surface_as_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
    }
}
