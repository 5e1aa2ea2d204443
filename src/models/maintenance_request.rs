//! Maintenance request tickets and their status lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Ticket status. The wire and database strings match the board columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "request_status")]
pub enum RequestStatus {
    New,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Repaired,
    Scrap,
}

impl RequestStatus {
    /// Statuses counted as active work on the dashboard.
    pub const ACTIVE: [RequestStatus; 2] = [Self::New, Self::InProgress];

    /// Statuses counted as completed work on the dashboard.
    pub const COMPLETED: [RequestStatus; 1] = [Self::Repaired];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Repaired => "Repaired",
            Self::Scrap => "Scrap",
        }
    }

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }

    pub fn is_completed(&self) -> bool {
        Self::COMPLETED.contains(self)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "request_type")]
pub enum RequestType {
    Corrective,
    Preventive,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: Uuid,
    pub subject: String,
    pub equipment_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub scheduled_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serialization_uses_board_labels() {
        let json = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let parsed: RequestStatus = serde_json::from_str("\"Repaired\"").unwrap();
        assert_eq!(parsed, RequestStatus::Repaired);
    }

    #[test]
    fn scrap_is_neither_active_nor_completed() {
        assert!(!RequestStatus::Scrap.is_active());
        assert!(!RequestStatus::Scrap.is_completed());
        assert!(RequestStatus::New.is_active());
        assert!(RequestStatus::InProgress.is_active());
        assert!(RequestStatus::Repaired.is_completed());
    }
}
