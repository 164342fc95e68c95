use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Runtime environment; selects the database name and safety rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Test,
}

/// Database backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite_file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "unknown database kind '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

impl DbKind {
    pub fn is_sqlite(self) -> bool {
        matches!(self, DbKind::SqliteFile | DbKind::SqliteMemory)
    }
}

/// Pool sizing read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub pool_min: u32,
    pub pool_max: u32,
    pub acquire_timeout_ms: u64,
    pub busy_timeout_ms: u32,
}

impl PoolSettings {
    pub fn from_env(kind: DbKind) -> Result<Self, AppError> {
        // Each in-memory SQLite connection is its own database
        if kind == DbKind::SqliteMemory {
            return Ok(Self {
                pool_min: 1,
                pool_max: 1,
                acquire_timeout_ms: 5_000,
                busy_timeout_ms: 5_000,
            });
        }

        let pool_max = parse_var("DB_POOL_MAX", 10u32)?;
        if pool_max == 0 {
            return Err(AppError::config("DB_POOL_MAX must be at least 1"));
        }
        Ok(Self {
            pool_min: 1,
            pool_max,
            acquire_timeout_ms: parse_var("DB_ACQUIRE_TIMEOUT_MS", 5_000u64)?,
            busy_timeout_ms: 5_000,
        })
    }
}

/// Builds a database URL from environment variables for the given env and backend
pub fn db_url(env: RuntimeEnv, kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(env)?;
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = env::var("SQLITE_DB_PATH").unwrap_or_else(|_| match env {
                RuntimeEnv::Prod => "bookshelf.db".to_string(),
                RuntimeEnv::Test => "bookshelf_test.db".to_string(),
            });
            Ok(format!("sqlite://{path}"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Database name for Postgres; the test profile must point at a `_test` database
fn db_name(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

/// Read `BOOKSHELF_DB_KIND`-style variables, falling back to `default`
pub fn db_kind_from_env(var: &str, default: DbKind) -> Result<DbKind, AppError> {
    match env::var(var) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(AppError::config(format!("failed to read {var}: {e}"))),
    }
}

fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'"))),
        Err(_) => Ok(default),
    }
}
