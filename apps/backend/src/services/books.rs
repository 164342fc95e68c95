//! Book domain service.

use sea_orm::DatabaseTransaction;
use tracing::{debug, info, warn};

use crate::domain::books::{BookPatch, NewBook};
use crate::errors::domain::{DomainError, IntegrityKind};
use crate::repos::books::{self, Book};

/// Book CRUD orchestration: validation first, then the store.
pub struct BookService;

impl BookService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create_book(
        &self,
        txn: &DatabaseTransaction,
        input: NewBook,
    ) -> Result<Book, DomainError> {
        let category_id = input.category_id;
        let fields = input.into_create()?;

        let book = books::create(txn, fields)
            .await
            .map_err(|e| refine_category_ref(e, category_id.map(Some)))?;

        info!(book_id = book.id, category_id = ?book.category_id, "book=created");
        Ok(book)
    }

    pub async fn get_book(&self, txn: &DatabaseTransaction, id: i32) -> Result<Book, DomainError> {
        books::find_by_id(txn, id)
            .await?
            .ok_or_else(|| DomainError::book_not_found(id))
    }

    /// All books, or only those referencing `category_id` when given.
    pub async fn list_books(
        &self,
        txn: &DatabaseTransaction,
        category_id: Option<i32>,
    ) -> Result<Vec<Book>, DomainError> {
        match category_id {
            Some(category_id) => books::list_by_category(txn, category_id).await,
            None => books::list_all(txn).await,
        }
    }

    /// Merge the supplied fields into the book; an empty patch is a read.
    pub async fn update_book(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        patch: BookPatch,
    ) -> Result<Book, DomainError> {
        if patch.is_empty() {
            debug!(book_id = id, "book=update empty patch");
        }
        let category_id = patch.category_id;
        let changes = patch.into_update()?;

        let updated = books::update(txn, id, changes)
            .await
            .map_err(|e| refine_category_ref(e, category_id))?
            .ok_or_else(|| DomainError::book_not_found(id))?;

        info!(book_id = id, "book=updated");
        Ok(updated)
    }

    pub async fn delete_book(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DomainError> {
        if !books::delete(txn, id).await? {
            return Err(DomainError::book_not_found(id));
        }
        info!(book_id = id, "book=deleted");
        Ok(())
    }
}

impl Default for BookService {
    fn default() -> Self {
        Self::new()
    }
}

/// Name the missing category when a write trips the foreign key.
fn refine_category_ref(err: DomainError, category_id: Option<Option<i32>>) -> DomainError {
    match (err, category_id) {
        (DomainError::Integrity(IntegrityKind::ForeignKey, _), Some(Some(category_id))) => {
            warn!(category_id, "book write references a missing category");
            DomainError::integrity(
                IntegrityKind::ForeignKey,
                format!("category {category_id} does not exist"),
            )
        }
        (err, _) => {
            if err.is_integrity() {
                warn!(error = %err, "book write rejected by store");
            }
            err
        }
    }
}
