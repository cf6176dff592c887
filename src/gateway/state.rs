use std::sync::Arc;

use crate::db::Database;
use crate::user_auth::AuthService;

/// Shared gateway application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: Arc<AuthService>) -> Self {
        Self { db, auth }
    }

    /// Shorthand for the underlying connection pool
    pub fn pool(&self) -> &sqlx::PgPool {
        self.db.pool()
    }
}
