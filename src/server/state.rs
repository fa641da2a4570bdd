//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::resilience::Resilience;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Resilience` shares its circuit breaker between clones
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Retry policy and circuit breaker guarding the roll number lookup.
    ///
    /// Every request shares the same breaker, so failures seen by one request open the
    /// circuit for all of them.
    pub lookup_resilience: Resilience,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `lookup_resilience` - Decorator for roll number lookups
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, lookup_resilience: Resilience) -> Self {
        Self {
            db,
            lookup_resilience,
        }
    }
}
