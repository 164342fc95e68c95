use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Integer `{id}` taken from the route path.
///
/// Existence is not checked here; services report a missing record.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i32);

impl PathId {
    fn parse(raw: &str) -> Result<Self, AppError> {
        raw.parse::<i32>().map(PathId).map_err(|_| {
            AppError::invalid(
                ErrorCode::InvalidId,
                format!("Invalid id: '{raw}' is not an integer"),
            )
        })
    }
}

impl FromRequest for PathId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(raw) => PathId::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidId,
                "Missing id parameter",
            )),
        };
        std::future::ready(result)
    }
}
