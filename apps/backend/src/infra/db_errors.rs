//! SeaORM -> DomainError translation.
//!
//! Every `sea_orm::DbErr` crosses into the domain through `map_db_err`.
//! Constraint violations raised by the store become
//! `DomainError::Integrity`; connectivity problems become `Infra`.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, IntegrityKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

fn is_foreign_key_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23503")
        || msg.contains("FOREIGN KEY constraint failed")
        || msg.contains("violates foreign key constraint")
}

fn is_unique_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23505")
        || msg.contains("UNIQUE constraint failed")
        || msg.contains("duplicate key value violates unique constraint")
}

fn is_check_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23514") || msg.contains("CHECK constraint failed")
}

/// Translate a `DbErr` into a `DomainError` with a sanitized detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(raw)) => {
            warn!(trace_id = %trace_id, raw_error = %raw, "Foreign key constraint violation");
            return DomainError::integrity(
                IntegrityKind::ForeignKey,
                "Foreign key constraint violation",
            );
        }
        Some(SqlErr::UniqueConstraintViolation(raw)) => {
            warn!(trace_id = %trace_id, raw_error = %raw, "Unique constraint violation");
            return DomainError::integrity(IntegrityKind::Unique, "Unique constraint violation");
        }
        _ => {}
    }

    let error_msg = e.to_string();

    match &e {
        DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    // Drivers don't always surface a structured code; fall back to the message
    if is_foreign_key_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::integrity(IntegrityKind::ForeignKey, "Foreign key constraint violation");
    }

    if is_unique_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        return DomainError::integrity(IntegrityKind::Unique, "Unique constraint violation");
    }

    if is_check_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Check constraint violation");
        return DomainError::integrity(
            IntegrityKind::Other("Check".into()),
            "Check constraint violation",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
