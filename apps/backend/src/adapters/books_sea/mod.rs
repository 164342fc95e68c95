//! SeaORM adapter for books.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::settle_savepoint;
use crate::entities::books;

pub mod dto;

pub use dto::{BookCreate, BookUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<books::Model>, sea_orm::DbErr> {
    books::Entity::find_by_id(id).one(conn).await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    books::Entity::find()
        .order_by_asc(books::Column::Id)
        .all(conn)
        .await
}

pub async fn list_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i32,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    books::Entity::find()
        .filter(books::Column::CategoryId.eq(category_id))
        .order_by_asc(books::Column::Id)
        .all(conn)
        .await
}

pub async fn count_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    books::Entity::find()
        .filter(books::Column::CategoryId.eq(category_id))
        .count(conn)
        .await
}

pub async fn create_book(
    txn: &DatabaseTransaction,
    dto: BookCreate,
) -> Result<books::Model, sea_orm::DbErr> {
    let active = books::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        author: Set(dto.author),
        publication_year: Set(dto.publication_year),
        category_id: Set(dto.category_id),
    };

    let savepoint = txn.begin().await?;
    let result = active.insert(&savepoint).await;
    settle_savepoint(savepoint, result).await
}

/// Returns `Ok(None)` when no book has this id.
pub async fn update_book(
    txn: &DatabaseTransaction,
    id: i32,
    dto: BookUpdate,
) -> Result<Option<books::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(txn, id).await? else {
        return Ok(None);
    };

    let mut active: books::ActiveModel = existing.clone().into();
    if let Some(title) = dto.title {
        active.title = Set(title);
    }
    if let Some(author) = dto.author {
        active.author = Set(author);
    }
    if let Some(year) = dto.publication_year {
        active.publication_year = Set(year);
    }
    if let Some(category_id) = dto.category_id {
        active.category_id = Set(category_id);
    }

    if !active.is_changed() {
        return Ok(Some(existing));
    }

    let savepoint = txn.begin().await?;
    let result = active.update(&savepoint).await;
    settle_savepoint(savepoint, result).await.map(Some)
}

/// Returns whether a row was removed.
pub async fn delete_book(txn: &DatabaseTransaction, id: i32) -> Result<bool, sea_orm::DbErr> {
    let savepoint = txn.begin().await?;
    let result = books::Entity::delete_by_id(id)
        .exec(&savepoint)
        .await
        .map(|res| res.rows_affected > 0);
    settle_savepoint(savepoint, result).await
}
