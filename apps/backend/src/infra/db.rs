use std::future::Future;
use std::process;
use std::str::FromStr;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, trace, warn};

use crate::config::db::{db_url, DbKind, PoolSettings, RuntimeEnv};
use crate::error::AppError;

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(
                    attempt,
                    max_attempts, interval_ms, "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Per-connection statements for SQLite; foreign keys are off by default in SQLite
fn sqlite_session_statements(settings: &PoolSettings) -> Vec<String> {
    vec![
        "PRAGMA foreign_keys = ON;".to_string(),
        format!("PRAGMA busy_timeout = {};", settings.busy_timeout_ms),
    ]
}

async fn build_sqlite_pool(
    url: &str,
    kind: DbKind,
    settings: &PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let connect_opts = SqliteConnectOptions::from_str(url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_opts = SqlitePoolOptions::new()
        .min_connections(settings.pool_min)
        .max_connections(settings.pool_max)
        .acquire_timeout(Duration::from_millis(settings.acquire_timeout_ms));

    if kind == DbKind::SqliteMemory {
        // The database lives only as long as its single connection
        pool_opts = pool_opts.idle_timeout(None).max_lifetime(None);
    }

    let statements = sqlite_session_statements(settings);
    let pool = pool_opts
        .after_connect(move |conn, _meta| {
            let statements = statements.clone();
            Box::pin(async move {
                for stmt in statements {
                    sqlx::query(&stmt).execute(&mut *conn).await?;
                }
                trace!("db=sqlite hook=after_connect ok");
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite connection pool: {e}")))?;

    info!(
        engine = "sqlite",
        path = url,
        min = settings.pool_min,
        max = settings.pool_max,
        "pool=create"
    );
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

async fn build_postgres_pool(
    url: &str,
    settings: &PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let pool = PgPoolOptions::new()
        .min_connections(settings.pool_min)
        .max_connections(settings.pool_max)
        .acquire_timeout(Duration::from_millis(settings.acquire_timeout_ms))
        .idle_timeout(Duration::from_secs(30))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("SET application_name = 'bookshelf';")
                    .execute(&mut *conn)
                    .await?;
                sqlx::query("SET timezone = 'UTC';")
                    .execute(&mut *conn)
                    .await?;
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect(url)
        .await
        .map_err(|e| AppError::config(format!("failed to connect to Postgres: {e}")))?;

    info!(
        engine = "postgres",
        min = settings.pool_min,
        max = settings.pool_max,
        "pool=create"
    );
    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
}

/// Build the app pool *and* guarantee the schema is current.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(env, kind)?;
    let settings = PoolSettings::from_env(kind)?;

    info!(env = ?env, db_kind = ?kind, pid = process::id(), "bootstrap=start");

    let conn = match kind {
        DbKind::Postgres => retry_connection(|| build_postgres_pool(&url, &settings), 5, 500).await?,
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            build_sqlite_pool(&url, kind, &settings).await?
        }
    };

    migration::migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migrations failed: {e}")))?;

    info!("bootstrap=ready");
    Ok(conn)
}
