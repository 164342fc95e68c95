use bookshelf::db::txn::with_txn;
use bookshelf::repos::books;
use bookshelf::repos::categories::{self, CategoryCreate, CategoryUpdate};
use bookshelf::AppError;

use crate::support::build_test_state;
use crate::support::factory::{seed_book, seed_category};

#[tokio::test]
async fn create_find_and_list() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let poetry = categories::create(
                txn,
                CategoryCreate {
                    name: "Poetry".into(),
                    description: Some("Verse of all kinds".into()),
                },
            )
            .await?;
            let drama = seed_category(txn, "Drama").await?;

            assert_eq!(categories::find_by_id(txn, poetry.id).await?, Some(poetry.clone()));
            assert_eq!(poetry.description.as_deref(), Some("Verse of all kinds"));
            assert_eq!(categories::list_all(txn).await?, vec![poetry, drama]);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn update_description_three_states() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let category = seed_category(txn, "Essays").await?;

            let described = categories::update(
                txn,
                category.id,
                CategoryUpdate {
                    name: None,
                    description: Some(Some("Short non-fiction".into())),
                },
            )
            .await?
            .expect("category exists");
            assert_eq!(described.description.as_deref(), Some("Short non-fiction"));

            // Name-only patch leaves the description alone
            let renamed = categories::update(
                txn,
                category.id,
                CategoryUpdate {
                    name: Some("Essays & Letters".into()),
                    description: None,
                },
            )
            .await?
            .expect("category exists");
            assert_eq!(renamed.name, "Essays & Letters");
            assert_eq!(renamed.description.as_deref(), Some("Short non-fiction"));

            let cleared = categories::update(
                txn,
                category.id,
                CategoryUpdate {
                    name: None,
                    description: Some(None),
                },
            )
            .await?
            .expect("category exists");
            assert_eq!(cleared.description, None);

            assert_eq!(
                categories::update(txn, 9999, CategoryUpdate::default()).await?,
                None
            );

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn store_refuses_to_delete_referenced_category() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let category = seed_category(txn, "Referenced").await?;
            let book = seed_book(txn, "Pinned", Some(category.id)).await?;

            // The foreign key is ON DELETE RESTRICT; no cascade, no silent nulling
            let err = categories::delete(txn, category.id).await.unwrap_err();
            assert!(err.is_integrity(), "unexpected error: {err:?}");

            assert!(categories::find_by_id(txn, category.id).await?.is_some());
            assert_eq!(books::find_by_id(txn, book.id).await?, Some(book));

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn delete_missing_returns_false() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            assert!(!categories::delete(txn, 404).await?);

            let category = seed_category(txn, "Gone").await?;
            assert!(categories::delete(txn, category.id).await?);
            assert_eq!(categories::find_by_id(txn, category.id).await?, None);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}
