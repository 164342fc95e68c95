#![allow(dead_code)]

// Shared setup for every test binary.
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde::de::DeserializeOwned;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Policy defaults to rollback but can be flipped per-binary via `BOOKSHELF_TXN_POLICY=commit`.
#[ctor::ctor]
fn init_txn_policy() {
    let raw = std::env::var("BOOKSHELF_TXN_POLICY").unwrap_or_default();
    bookshelf::db::txn_policy::set_txn_policy(
        bookshelf::db::txn_policy::TxnPolicy::from_env_value(&raw),
    );
}

/// Read a successful response body as `T`, panicking with the raw body otherwise.
pub async fn read_json<T: DeserializeOwned>(resp: ServiceResponse<BoxBody>) -> T {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "failed to parse response body: {e}; raw: {}",
            String::from_utf8_lossy(&body)
        )
    })
}
