//! User identities as issued by the authentication collaborator.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "user_role")]
pub enum UserRole {
    Admin,
    Manager,
    Technician,
    User,
}

impl UserRole {
    /// Roles that may be assigned to a maintenance team.
    pub const TEAM_ELIGIBLE: [UserRole; 2] = [Self::Technician, Self::Manager];

    pub fn can_join_team(&self) -> bool {
        Self::TEAM_ELIGIBLE.contains(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: Option<String>,
}
