//! Application state shared across handlers.

use sqlx::SqlitePool;

use crate::db::{OrderRepository, ProductRepository, UserRepository};

/// Storage handle owned by the process and injected into every handler.
///
/// Cloning is cheap: `SqlitePool` is reference counted.
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
}

impl AppState {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    #[must_use]
    pub const fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.pool)
    }

    #[must_use]
    pub const fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(&self.pool)
    }

    #[must_use]
    pub const fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(&self.pool)
    }
}
