//! Navigation menu filtered by the caller's role.

use axum::Json;

use crate::errors::ApiResponse;
use crate::middleware::auth::CurrentUser;
use crate::view::navigation::{self, MenuItem};

/// GET /api/navigation — menu entries visible to the current user.
pub async fn menu(user: CurrentUser) -> Json<ApiResponse<Vec<MenuItem>>> {
    ApiResponse::success(navigation::visible_menu(user.role))
}
