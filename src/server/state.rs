//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! needed by the application. The state is initialized once during startup and
//! then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Initialized once during server startup and cloned (cheaply, as
/// `DatabaseConnection` is a pooled handle) for each incoming request via
/// Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database. Repositories borrow it per request,
    /// so each request performs its reads and writes on one scoped handle that
    /// the pool reclaims when the request completes.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
