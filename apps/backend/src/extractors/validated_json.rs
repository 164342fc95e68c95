use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// JSON body extractor with the project's error shape.
///
/// Malformed JSON becomes a 400 `BAD_REQUEST`; well-formed JSON that doesn't
/// fit `T` (missing field, wrong type) becomes a 422 `VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Extract content type before creating the async future to avoid borrow-across-await
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(
                        trace_id = %trace_id,
                        error = %e,
                        "Failed to read request body chunk"
                    );
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    category = ?e.classify(),
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                json_error_to_app_error(&e)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

fn json_error_to_app_error(error: &JsonError) -> AppError {
    match error.classify() {
        Category::Data => AppError::invalid(ErrorCode::ValidationError, classify_json_error(error)),
        _ => AppError::bad_request(ErrorCode::BadRequest, classify_json_error(error)),
    }
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => {
            // serde's message without the trailing " at line X column Y"
            let msg = error.to_string();
            let reason = msg.split(" at line ").next().unwrap_or("wrong types for one or more fields");
            format!("Invalid request body: {reason}")
        }
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
