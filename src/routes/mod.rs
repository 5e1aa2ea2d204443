//! Route definitions for the GearGuard API.

pub mod health;
pub mod navigation;
pub mod stats;
pub mod teams;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the API router. CORS is layered on by the server binary.
pub fn router(state: AppState) -> Router {
    let stats_routes = Router::new()
        .route("/stats/dashboard", get(stats::dashboard))
        .route("/stats/activities", get(stats::activities));

    let app_routes = Router::new()
        .route("/navigation", get(navigation::menu))
        .route(
            "/teams/types/{team_type}/departments",
            get(teams::departments),
        )
        .route("/teams/types/{team_type}/members", get(teams::members));

    let api_routes = stats_routes.merge(app_routes);

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
