//! Book repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;

use crate::adapters::books_sea as adapter;
use crate::entities::books;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub use adapter::{BookCreate, BookUpdate};

/// Book domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub category_id: Option<i32>,
}

impl From<books::Model> for Book {
    fn from(model: books::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            publication_year: model.publication_year,
            category_id: model.category_id,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<Book>, DomainError> {
    let model = adapter::find_by_id(conn, id).await.map_err(map_db_err)?;
    Ok(model.map(Book::from))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Book>, DomainError> {
    let models = adapter::list_all(conn).await.map_err(map_db_err)?;
    Ok(models.into_iter().map(Book::from).collect())
}

pub async fn list_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i32,
) -> Result<Vec<Book>, DomainError> {
    let models = adapter::list_by_category(conn, category_id)
        .await
        .map_err(map_db_err)?;
    Ok(models.into_iter().map(Book::from).collect())
}

pub async fn count_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i32,
) -> Result<u64, DomainError> {
    adapter::count_by_category(conn, category_id)
        .await
        .map_err(map_db_err)
}

/// Fails with `DomainError::Integrity` when `category_id` names a missing category.
pub async fn create(txn: &DatabaseTransaction, fields: BookCreate) -> Result<Book, DomainError> {
    let model = adapter::create_book(txn, fields).await.map_err(map_db_err)?;
    Ok(Book::from(model))
}

/// `Ok(None)` if the book doesn't exist; `Integrity` on a bad category reference.
pub async fn update(
    txn: &DatabaseTransaction,
    id: i32,
    patch: BookUpdate,
) -> Result<Option<Book>, DomainError> {
    let model = adapter::update_book(txn, id, patch)
        .await
        .map_err(map_db_err)?;
    Ok(model.map(Book::from))
}

pub async fn delete(txn: &DatabaseTransaction, id: i32) -> Result<bool, DomainError> {
    adapter::delete_book(txn, id).await.map_err(map_db_err)
}
