//! Repository layer: domain models over the SeaORM adapters.
//!
//! Repos return `DomainError`; every storage failure goes through
//! `infra::db_errors::map_db_err`.

pub mod books;
pub mod categories;
