use sea_orm::DatabaseConnection;

use crate::config::db::DbKind;

/// Application state shared by all workers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pooled database connection
    pub db: DatabaseConnection,
    /// Backend the pool was built for
    pub db_kind: DbKind,
}

impl AppState {
    pub fn new(db: DatabaseConnection, db_kind: DbKind) -> Self {
        Self { db, db_kind }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
