//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Built once in `main` and cloned into each request; the pool is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
