use bookshelf::db::txn::{with_txn, SharedTxn};
use bookshelf::errors::ErrorCode;
use bookshelf::repos::categories;
use bookshelf::AppError;

use crate::support::build_test_state;
use crate::support::factory::seed_category;

#[tokio::test]
async fn error_rolls_back_and_is_returned_unchanged() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let result: Result<(), AppError> = with_txn(None, &state, |txn| {
        Box::pin(async move {
            seed_category(txn, "Doomed").await?;
            Err::<(), _>(AppError::internal("boom"))
        })
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Internal);
    assert_eq!(err.detail(), "boom");

    // Nothing survived the rollback
    let remaining = with_txn(None, &state, |txn| {
        Box::pin(async move { categories::list_all(txn).await.map_err(AppError::from) })
    })
    .await?;
    assert!(remaining.is_empty());

    Ok(())
}

#[tokio::test]
async fn shared_txn_is_visible_across_scopes() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(state.db()).await?;

    let created = seed_category(shared.transaction(), "Shared").await?;
    let found = categories::find_by_id(shared.transaction(), created.id).await?;
    assert_eq!(found, Some(created));

    shared.rollback().await?;

    let after = with_txn(None, &state, |txn| {
        Box::pin(async move { categories::list_all(txn).await.map_err(AppError::from) })
    })
    .await?;
    assert!(after.is_empty());

    Ok(())
}

#[tokio::test]
async fn rollback_fails_while_still_shared() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(state.db()).await?;
    let clone = shared.clone();

    let err = shared.rollback().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Internal);

    clone.rollback().await?;
    Ok(())
}
