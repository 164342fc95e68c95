use bookshelf::db::txn::with_txn;
use bookshelf::domain::books::{BookPatch, NewBook};
use bookshelf::errors::domain::{DomainError, IntegrityKind, NotFoundKind};
use bookshelf::services::books::BookService;
use bookshelf::AppError;

use crate::support::build_test_state;
use crate::support::factory::{seed_book, seed_category};

fn new_book(title: &str, category_id: Option<i32>) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: "Ursula K. Le Guin".to_string(),
        publication_year: 1969,
        category_id,
    }
}

#[tokio::test]
async fn create_and_get_roundtrip() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let service = BookService::new();
            let category = seed_category(txn, "Sci-Fi").await?;

            let created = service
                .create_book(txn, new_book("The Left Hand of Darkness", Some(category.id)))
                .await?;
            let fetched = service.get_book(txn, created.id).await?;

            assert_eq!(fetched, created);
            assert_eq!(fetched.title, "The Left Hand of Darkness");
            assert_eq!(fetched.category_id, Some(category.id));

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn invalid_input_never_reaches_the_store() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let service = BookService::new();

            let bad_year = NewBook {
                publication_year: 999,
                ..new_book("Too Early", None)
            };
            assert!(matches!(
                service.create_book(txn, bad_year).await,
                Err(DomainError::Validation(_))
            ));

            // Validation beats the missing category: no integrity error surfaces
            let bad_author = NewBook {
                author: String::new(),
                ..new_book("Nobody Wrote This", Some(12345))
            };
            assert!(matches!(
                service.create_book(txn, bad_author).await,
                Err(DomainError::Validation(_))
            ));

            assert!(service.list_books(txn, None).await?.is_empty());

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn missing_category_is_integrity_with_reason() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let err = BookService::new()
                .create_book(txn, new_book("Lost", Some(404)))
                .await
                .unwrap_err();
            assert_eq!(
                err,
                DomainError::integrity(IntegrityKind::ForeignKey, "category 404 does not exist")
            );

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn list_books_filters_by_category() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let service = BookService::new();
            let a = seed_category(txn, "A").await?;
            let b = seed_category(txn, "B").await?;

            let in_a = seed_book(txn, "in a", Some(a.id)).await?;
            let in_b = seed_book(txn, "in b", Some(b.id)).await?;
            let loose = seed_book(txn, "loose", None).await?;

            assert_eq!(service.list_books(txn, Some(a.id)).await?, vec![in_a.clone()]);
            assert_eq!(service.list_books(txn, Some(b.id)).await?, vec![in_b.clone()]);
            assert_eq!(service.list_books(txn, None).await?, vec![in_a, in_b, loose]);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn update_merges_supplied_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let service = BookService::new();
            let category = seed_category(txn, "Fantasy").await?;
            let book = service
                .create_book(txn, new_book("A Wizard of Earthsea", Some(category.id)))
                .await?;

            let patch = BookPatch {
                title: Some("The Tombs of Atuan".into()),
                ..BookPatch::default()
            };
            let updated = service.update_book(txn, book.id, patch).await?;
            assert_eq!(updated.title, "The Tombs of Atuan");
            assert_eq!(updated.author, book.author);
            assert_eq!(updated.publication_year, book.publication_year);
            assert_eq!(updated.category_id, book.category_id);

            let unchanged = service
                .update_book(txn, book.id, BookPatch::default())
                .await?;
            assert_eq!(unchanged, updated);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn update_errors() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let service = BookService::new();

            let err = service
                .update_book(txn, 8080, BookPatch::default())
                .await
                .unwrap_err();
            assert_eq!(err, DomainError::book_not_found(8080));

            let book = seed_book(txn, "Anchored", None).await?;
            let err = service
                .update_book(
                    txn,
                    book.id,
                    BookPatch {
                        category_id: Some(Some(66)),
                        ..BookPatch::default()
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                DomainError::Integrity(IntegrityKind::ForeignKey, _)
            ));

            let err = service
                .update_book(
                    txn,
                    book.id,
                    BookPatch {
                        title: Some(String::new()),
                        ..BookPatch::default()
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn delete_then_get_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let service = BookService::new();
            let book = seed_book(txn, "Ephemeral", None).await?;

            service.delete_book(txn, book.id).await?;

            let err = service.get_book(txn, book.id).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Book, _)));

            let err = service.delete_book(txn, book.id).await.unwrap_err();
            assert_eq!(err, DomainError::book_not_found(book.id));

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}
