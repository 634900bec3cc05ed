//! Shared application state.

/// Cloned into routers and the shutdown task (the pool is an `Arc` inside).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
