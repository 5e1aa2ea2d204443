//! Team configuration routes.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::RequireManager;
use crate::models::team::TeamType;
use crate::models::user::{User, UserRole};
use crate::services::team::eligible_members;
use crate::AppState;

fn parse_team_type(label: &str) -> Result<TeamType, AppError> {
    TeamType::from_label(label)
        .ok_or_else(|| AppError::NotFound(format!("Unknown team type '{label}'")))
}

/// GET /api/teams/types/{team_type}/departments — departments a team type recruits from (manager+).
pub async fn departments(
    RequireManager(_manager): RequireManager,
    Path(team_type): Path<String>,
) -> Result<Json<ApiResponse<Vec<&'static str>>>, AppError> {
    let team_type = parse_team_type(&team_type)?;
    Ok(ApiResponse::success(
        team_type.relevant_departments().to_vec(),
    ))
}

/// GET /api/teams/types/{team_type}/members — users who may join a team of this type (manager+).
pub async fn members(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(team_type): Path<String>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let team_type = parse_team_type(&team_type)?;
    let users = state
        .store
        .find_users(&UserRole::TEAM_ELIGIBLE)
        .await
        .map_err(|e| AppError::store("Error fetching team members", e))?;

    let eligible = eligible_members(team_type, &users)
        .into_iter()
        .cloned()
        .collect();
    Ok(ApiResponse::success(eligible))
}
