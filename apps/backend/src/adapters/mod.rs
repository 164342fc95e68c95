//! SeaORM adapters: the raw entity store.
//!
//! Adapters speak `sea_orm::DbErr`; repos translate into domain errors.

use sea_orm::{DatabaseTransaction, DbErr};

pub mod books_sea;
pub mod categories_sea;

/// Commit a savepoint if `result` is Ok, roll it back otherwise.
///
/// Every mutation runs in its own savepoint so a constraint failure leaves no
/// partial write and keeps the enclosing request transaction usable.
pub(crate) async fn settle_savepoint<T>(
    savepoint: DatabaseTransaction,
    result: Result<T, DbErr>,
) -> Result<T, DbErr> {
    match result {
        Ok(value) => {
            savepoint.commit().await?;
            Ok(value)
        }
        Err(err) => {
            // Preserve the original error
            let _ = savepoint.rollback().await;
            Err(err)
        }
    }
}
