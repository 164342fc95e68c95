use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod books;
pub mod categories;
pub mod health;

/// Register every route plus the shared extractor configuration.
///
/// Used by `main.rs` and by the test app builder, so both serve the same
/// surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::invalid(
            ErrorCode::ValidationError,
            format!("Invalid query string: {err}"),
        )
        .into()
    }));

    health::configure_routes(cfg);
    books::configure_routes(cfg);
    categories::configure_routes(cfg);
}
