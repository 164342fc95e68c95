use actix_web::http::StatusCode;
use actix_web::test;
use bookshelf::AppError;
use serde_json::Value;

use crate::common::read_json;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn health_reports_db_and_migrations() -> Result<(), AppError> {
    let state = build_test_state().await?;
    // No shared transaction: the probe needs its own connection
    let app = create_test_app(state).build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20250301_000001_init");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["time"].as_str().is_some_and(|t| t.contains('T')));
    assert!(body.get("db_error").is_none());

    Ok(())
}
