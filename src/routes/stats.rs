//! Stats routes: dashboard counters and the recent-activity feed.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::activity::Activity;
use crate::services::stats::{self, DashboardStats};
use crate::AppState;

/// GET /api/stats/dashboard — aggregated dashboard statistics.
pub async fn dashboard(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<ApiResponse<DashboardStats>>, AppError> {
    let stats = stats::get_dashboard_stats(state.store.as_ref())
        .await
        .map_err(|e| AppError::store("Error fetching dashboard statistics", e))?;
    Ok(ApiResponse::success(stats))
}

/// GET /api/stats/activities — most recent changes, newest first.
pub async fn activities(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<Activity>>>, AppError> {
    let activities =
        stats::get_recent_activities(state.store.as_ref(), state.config.activity_feed_limit)
            .await
            .map_err(|e| AppError::store("Error fetching recent activities", e))?;
    Ok(ApiResponse::success(activities))
}
