//! Error codes for the bookshelf API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Input failed declared field constraints
    ValidationError,
    /// Body could not be parsed at all
    BadRequest,
    /// Path or query identifier is not an integer
    InvalidId,

    // Resource Not Found
    BookNotFound,
    CategoryNotFound,
    /// Generic not found (DB-driven, no entity context)
    NotFound,

    // Integrity
    /// Book references a category that does not exist
    FkViolation,
    /// Category still has books referencing it
    CategoryHasBooks,
    /// Unique constraint violation
    UniqueViolation,
    /// Any other integrity rule violation
    IntegrityError,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidId => "INVALID_ID",

            Self::BookNotFound => "BOOK_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::FkViolation => "FK_VIOLATION",
            Self::CategoryHasBooks => "CATEGORY_HAS_BOOKS",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::IntegrityError => "INTEGRITY_ERROR",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
