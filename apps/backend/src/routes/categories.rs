//! Category HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};

use crate::db::txn::with_txn;
use crate::domain::categories::{CategoryPatch, NewCategory};
use crate::error::AppError;
use crate::extractors::{PathId, ValidatedJson};
use crate::services::categories::CategoryService;
use crate::state::app_state::AppState;

async fn list_categories(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let categories = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            CategoryService::new()
                .list_categories(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(categories))
}

async fn get_category(
    http_req: HttpRequest,
    id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let category = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            CategoryService::new()
                .get_category(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(category))
}

async fn create_category(
    http_req: HttpRequest,
    body: ValidatedJson<NewCategory>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner();
    let category = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            CategoryService::new()
                .create_category(txn, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(category))
}

/// PUT and PATCH both land here; either is a partial update.
async fn update_category(
    http_req: HttpRequest,
    id: PathId,
    body: ValidatedJson<CategoryPatch>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let patch = body.into_inner();
    let category = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            CategoryService::new()
                .update_category(txn, id.0, patch)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(category))
}

/// 400 `CATEGORY_HAS_BOOKS` while books still reference the category.
async fn delete_category(
    http_req: HttpRequest,
    id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            CategoryService::new()
                .delete_category(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/categories", "/categories/"])
            .route(web::get().to(list_categories))
            .route(web::post().to(create_category)),
    )
    .service(
        web::resource(["/categories/{id}", "/categories/{id}/"])
            .route(web::get().to(get_category))
            .route(web::put().to(update_category))
            .route(web::patch().to(update_category))
            .route(web::delete().to(delete_category)),
    );
}
