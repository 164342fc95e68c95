//! Backend test support utilities
//!
//! Shared helpers for the bookshelf backend test binaries: one-time logging
//! initialisation and assertions over RFC 7807 problem details responses.

pub mod logging;
pub mod problem_details;
