//! Equipment tracked by the maintenance department.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    pub serial_number: String,
    pub category: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub is_scrapped: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
