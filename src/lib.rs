pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod view;

use std::sync::Arc;

use store::RecordStore;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub config: config::AppConfig,
}
