//! Maintenance teams and the departments each team type draws from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "team_type")]
pub enum TeamType {
    Mechanics,
    Electricians,
    #[serde(rename = "IT Support")]
    #[sqlx(rename = "IT Support")]
    ItSupport,
    #[serde(rename = "HVAC")]
    #[sqlx(rename = "HVAC")]
    Hvac,
    Plumbing,
    General,
    Other,
}

impl TeamType {
    pub const ALL: [TeamType; 7] = [
        Self::Mechanics,
        Self::Electricians,
        Self::ItSupport,
        Self::Hvac,
        Self::Plumbing,
        Self::General,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mechanics => "Mechanics",
            Self::Electricians => "Electricians",
            Self::ItSupport => "IT Support",
            Self::Hvac => "HVAC",
            Self::Plumbing => "Plumbing",
            Self::General => "General",
            Self::Other => "Other",
        }
    }

    /// Look up a team type by its display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Departments whose technicians are relevant for this team type.
    ///
    /// An empty slice means no department restriction.
    pub fn relevant_departments(&self) -> &'static [&'static str] {
        match self {
            Self::Mechanics => &["Maintenance", "Mechanical", "Manufacturing", "Production"],
            Self::Electricians => &["Electrical", "Maintenance", "Manufacturing"],
            Self::ItSupport => &["IT", "IT Support", "Technology"],
            Self::Hvac => &["HVAC", "Facilities", "Maintenance"],
            Self::Plumbing => &["Plumbing", "Facilities", "Maintenance"],
            Self::General => &["Maintenance", "Facilities", "General"],
            Self::Other => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTeam {
    pub id: Uuid,
    pub name: String,
    pub team_type: TeamType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
