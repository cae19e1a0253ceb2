//! Shared application state.

use database::mongodb::{Client, Database};

/// Cloned into route builders; the client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}
