use actix_web::http::StatusCode;
use actix_web::test;
use bookshelf::db::txn::SharedTxn;
use bookshelf::AppError;
use serde_json::{json, Value};

use crate::common::read_json;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn category_crud() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(state.db()).await?;
    let app = create_test_app(state)
        .with_shared_txn(shared.clone())
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Horror", "description": "Things that go bump" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = read_json(resp).await;
    let id = created["id"].as_i64().expect("id is an integer");
    assert_eq!(created["name"], "Horror");

    let req = test::TestRequest::get().uri("/categories/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Vec<Value> = read_json(resp).await;
    assert_eq!(listed, vec![created.clone()]);

    let req = test::TestRequest::patch()
        .uri(&format!("/categories/{id}"))
        .set_json(json!({ "description": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: Value = read_json(resp).await;
    assert_eq!(patched["name"], "Horror");
    assert_eq!(patched["description"], Value::Null);

    let req = test::TestRequest::put()
        .uri(&format!("/categories/{id}/"))
        .set_json(json!({ "name": "Gothic" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let put: Value = read_json(resp).await;
    assert_eq!(put["name"], "Gothic");

    let req = test::TestRequest::delete()
        .uri(&format!("/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    backend_test_support::problem_details::assert_problem_details_from_service_response(
        resp,
        "CATEGORY_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn invalid_category_is_422() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(state.db()).await?;
    let app = create_test_app(state)
        .with_shared_txn(shared.clone())
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    backend_test_support::problem_details::assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::UNPROCESSABLE_ENTITY,
        Some("name"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Ok", "description": "x".repeat(501) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// The Sci-Fi / Dune lifecycle over HTTP.
#[actix_web::test]
async fn delete_guard_over_http() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(state.db()).await?;
    let app = create_test_app(state)
        .with_shared_txn(shared.clone())
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Sci-Fi" }))
        .to_request();
    let category: Value = read_json(test::call_service(&app, req).await).await;
    let category_id = category["id"].as_i64().expect("id is an integer");

    let req = test::TestRequest::post()
        .uri("/books")
        .set_json(json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "publication_year": 1965,
            "category_id": category_id
        }))
        .to_request();
    let book: Value = read_json(test::call_service(&app, req).await).await;
    let book_id = book["id"].as_i64().expect("id is an integer");

    let req = test::TestRequest::get()
        .uri(&format!("/books?category_id={category_id}"))
        .to_request();
    let filtered: Vec<Value> = read_json(test::call_service(&app, req).await).await;
    assert!(filtered.contains(&book));

    let req = test::TestRequest::delete()
        .uri(&format!("/categories/{category_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    backend_test_support::problem_details::assert_problem_details_from_service_response(
        resp,
        "CATEGORY_HAS_BOOKS",
        StatusCode::BAD_REQUEST,
        Some("cannot delete category with associated books"),
    )
    .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/books/{book_id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/categories/{category_id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    Ok(())
}
