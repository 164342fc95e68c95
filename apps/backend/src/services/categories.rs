//! Category domain service.

use sea_orm::DatabaseTransaction;
use tracing::{debug, info, warn};

use crate::domain::categories::{CategoryPatch, NewCategory};
use crate::errors::domain::{DomainError, IntegrityKind};
use crate::repos::books;
use crate::repos::categories::{self, Category};

pub const CATEGORY_HAS_BOOKS: &str = "cannot delete category with associated books";

/// Category domain service.
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create_category(
        &self,
        txn: &DatabaseTransaction,
        input: NewCategory,
    ) -> Result<Category, DomainError> {
        let category = categories::create(txn, input.into_create()?).await?;
        info!(category_id = category.id, "category=created");
        Ok(category)
    }

    pub async fn get_category(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
    ) -> Result<Category, DomainError> {
        categories::find_by_id(txn, id)
            .await?
            .ok_or_else(|| DomainError::category_not_found(id))
    }

    pub async fn list_categories(
        &self,
        txn: &DatabaseTransaction,
    ) -> Result<Vec<Category>, DomainError> {
        categories::list_all(txn).await
    }

    pub async fn update_category(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        patch: CategoryPatch,
    ) -> Result<Category, DomainError> {
        if patch.is_empty() {
            debug!(category_id = id, "category=update empty patch");
        }
        let changes = patch.into_update()?;
        let updated = categories::update(txn, id, changes)
            .await?
            .ok_or_else(|| DomainError::category_not_found(id))?;
        info!(category_id = id, "category=updated");
        Ok(updated)
    }

    /// Refused while any book references the category; the store is left untouched.
    pub async fn delete_category(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
    ) -> Result<(), DomainError> {
        let book_count = books::count_by_category(txn, id).await?;
        if book_count > 0 {
            warn!(category_id = id, book_count, "category delete blocked by books");
            return Err(DomainError::integrity(
                IntegrityKind::CategoryHasBooks,
                CATEGORY_HAS_BOOKS,
            ));
        }

        if categories::find_by_id(txn, id).await?.is_none() {
            return Err(DomainError::category_not_found(id));
        }
        if !categories::delete(txn, id).await? {
            return Err(DomainError::category_not_found(id));
        }

        info!(category_id = id, "category=deleted");
        Ok(())
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
