//! HTTP layer - axum router, shared state and request handlers
//!
//! Handlers translate requests into calls on [`crate::core`] and map the typed
//! errors coming back into status codes and `{"msg": ...}` bodies.

/// HTTP error mapping
pub mod error;
/// Request handlers grouped by resource
pub mod handlers;
/// Router assembly
pub mod routes;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub use routes::build_router;

/// Shared data available to all handlers.
/// Holds the database handle opened at startup; clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all store operations
    pub database: Arc<DatabaseConnection>,
}

impl AppState {
    /// Creates a new `AppState` around an open database connection.
    #[must_use]
    pub fn new(database: DatabaseConnection) -> Self {
        Self {
            database: Arc::new(database),
        }
    }

    /// Gives back the connection once every other clone of the state is gone.
    ///
    /// Returns `None` while handlers or other clones still hold the state.
    #[must_use]
    pub fn into_database(self) -> Option<DatabaseConnection> {
        Arc::try_unwrap(self.database).ok()
    }
}
