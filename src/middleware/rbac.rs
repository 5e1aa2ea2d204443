//! Role-based access control extractor for Axum handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::middleware::auth::CurrentUser;
use crate::models::user::UserRole;
use crate::AppState;

/// Extractor that requires the Manager or Admin role.
#[derive(Debug, Clone)]
pub struct RequireManager(pub CurrentUser);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        match user.role {
            UserRole::Manager | UserRole::Admin => Ok(RequireManager(user)),
            _ => Err(AppError::Forbidden(
                "Manager or admin access required".to_string(),
            )),
        }
    }
}
