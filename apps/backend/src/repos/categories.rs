//! Category repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;

use crate::adapters::categories_sea as adapter;
use crate::entities::categories;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub use adapter::{CategoryCreate, CategoryUpdate};

/// Category domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<Category>, DomainError> {
    let model = adapter::find_by_id(conn, id).await.map_err(map_db_err)?;
    Ok(model.map(Category::from))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Category>, DomainError> {
    let models = adapter::list_all(conn).await.map_err(map_db_err)?;
    Ok(models.into_iter().map(Category::from).collect())
}

pub async fn create(
    txn: &DatabaseTransaction,
    fields: CategoryCreate,
) -> Result<Category, DomainError> {
    let model = adapter::create_category(txn, fields)
        .await
        .map_err(map_db_err)?;
    Ok(Category::from(model))
}

/// `Ok(None)` if the category doesn't exist.
pub async fn update(
    txn: &DatabaseTransaction,
    id: i32,
    patch: CategoryUpdate,
) -> Result<Option<Category>, DomainError> {
    let model = adapter::update_category(txn, id, patch)
        .await
        .map_err(map_db_err)?;
    Ok(model.map(Category::from))
}

pub async fn delete(txn: &DatabaseTransaction, id: i32) -> Result<bool, DomainError> {
    adapter::delete_category(txn, id).await.map_err(map_db_err)
}
