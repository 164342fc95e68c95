//! Book HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::domain::books::{BookPatch, NewBook};
use crate::error::AppError;
use crate::extractors::{PathId, ValidatedJson};
use crate::services::books::BookService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookListQuery {
    pub category_id: Option<i32>,
}

/// GET /books[?category_id=N]
async fn list_books(
    http_req: HttpRequest,
    query: web::Query<BookListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let category_id = query.category_id;
    let books = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            BookService::new()
                .list_books(txn, category_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(books))
}

/// GET /books/{id}
async fn get_book(
    http_req: HttpRequest,
    id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let book = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            BookService::new()
                .get_book(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(book))
}

/// POST /books
async fn create_book(
    http_req: HttpRequest,
    body: ValidatedJson<NewBook>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner();
    let book = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            BookService::new()
                .create_book(txn, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(book))
}

/// PUT|PATCH /books/{id}
///
/// Both verbs apply a partial update.
async fn update_book(
    http_req: HttpRequest,
    id: PathId,
    body: ValidatedJson<BookPatch>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let patch = body.into_inner();
    let book = with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            BookService::new()
                .update_book(txn, id.0, patch)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(book))
}

/// DELETE /books/{id}
async fn delete_book(
    http_req: HttpRequest,
    id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&http_req), &app_state, move |txn| {
        Box::pin(async move {
            BookService::new()
                .delete_book(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/books", "/books/"])
            .route(web::get().to(list_books))
            .route(web::post().to(create_book)),
    )
    .service(
        web::resource(["/books/{id}", "/books/{id}/"])
            .route(web::get().to(get_book))
            .route(web::put().to(update_book))
            .route(web::patch().to(update_book))
            .route(web::delete().to(delete_book)),
    );
}
