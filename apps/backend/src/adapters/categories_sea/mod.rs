//! SeaORM adapter for categories.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet, QueryOrder, Set,
    TransactionTrait,
};

use super::settle_savepoint;
use crate::entities::categories;

pub mod dto;

pub use dto::{CategoryCreate, CategoryUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find_by_id(id).one(conn).await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find()
        .order_by_asc(categories::Column::Id)
        .all(conn)
        .await
}

pub async fn create_category(
    txn: &DatabaseTransaction,
    dto: CategoryCreate,
) -> Result<categories::Model, sea_orm::DbErr> {
    let active = categories::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
    };

    let savepoint = txn.begin().await?;
    let result = active.insert(&savepoint).await;
    settle_savepoint(savepoint, result).await
}

/// Returns `Ok(None)` when no category has this id.
pub async fn update_category(
    txn: &DatabaseTransaction,
    id: i32,
    dto: CategoryUpdate,
) -> Result<Option<categories::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(txn, id).await? else {
        return Ok(None);
    };

    let mut active: categories::ActiveModel = existing.clone().into();
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(description) = dto.description {
        active.description = Set(description);
    }

    if !active.is_changed() {
        return Ok(Some(existing));
    }

    let savepoint = txn.begin().await?;
    let result = active.update(&savepoint).await;
    settle_savepoint(savepoint, result).await.map(Some)
}

/// Returns whether a row was removed.
pub async fn delete_category(txn: &DatabaseTransaction, id: i32) -> Result<bool, sea_orm::DbErr> {
    let savepoint = txn.begin().await?;
    let result = categories::Entity::delete_by_id(id)
        .exec(&savepoint)
        .await
        .map(|res| res.rows_affected > 0);
    settle_savepoint(savepoint, result).await
}
