//! Dashboard statistics aggregation and the recent-activity feed.

use serde::{Deserialize, Serialize};

use crate::models::activity::Activity;
use crate::models::maintenance_request::RequestStatus;
use crate::store::{
    EntityKind, RecentCriteria, RecentRecord, RecordDetail, RecordFilter, RecordStore, StoreError,
};

/// Headline counters for the dashboard overview cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_equipment: i64,
    /// Requests in `New` or `In Progress`.
    pub active_requests: i64,
    /// Requests in `Repaired`.
    pub completed_requests: i64,
    /// Teams flagged active.
    pub total_teams: i64,
}

/// Compute the four dashboard counters with concurrent count queries.
///
/// Any failing query fails the whole call; no partial stats are returned.
/// Requests in `Scrap` are counted in neither `active_requests` nor
/// `completed_requests`.
pub async fn get_dashboard_stats(store: &dyn RecordStore) -> Result<DashboardStats, StoreError> {
    let active = RecordFilter::StatusIn(RequestStatus::ACTIVE.to_vec());
    let completed = RecordFilter::StatusIn(RequestStatus::COMPLETED.to_vec());

    let (total_equipment, active_requests, completed_requests, total_teams) = tokio::try_join!(
        store.count(EntityKind::Equipment, &RecordFilter::All),
        store.count(EntityKind::MaintenanceRequest, &active),
        store.count(EntityKind::MaintenanceRequest, &completed),
        store.count(EntityKind::MaintenanceTeam, &RecordFilter::TeamActive(true)),
    )?;

    tracing::debug!(
        total_equipment,
        active_requests,
        completed_requests,
        total_teams,
        "Dashboard stats computed"
    );

    Ok(DashboardStats {
        total_equipment,
        active_requests,
        completed_requests,
        total_teams,
    })
}

/// Collect the most recent changes across equipment, requests, and teams.
///
/// Each source contributes at most `limit` records; the merged feed is sorted
/// newest-first and truncated to `limit`.
pub async fn get_recent_activities(
    store: &dyn RecordStore,
    limit: usize,
) -> Result<Vec<Activity>, StoreError> {
    let equipment_criteria = RecentCriteria::of(EntityKind::Equipment);
    let request_criteria = RecentCriteria::of(EntityKind::MaintenanceRequest);
    let team_criteria = RecentCriteria::of(EntityKind::MaintenanceTeam);
    let (equipment, requests, teams) = tokio::try_join!(
        store.find_recent(&equipment_criteria, limit),
        store.find_recent(&request_criteria, limit),
        store.find_recent(&team_criteria, limit),
    )?;

    let mut records: Vec<RecentRecord> = equipment
        .into_iter()
        .chain(requests)
        .chain(teams)
        .collect();
    records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    records.truncate(limit);

    Ok(records.iter().map(to_activity).collect())
}

fn icon_for(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Equipment => "🔧",
        EntityKind::MaintenanceRequest => "📝",
        EntityKind::MaintenanceTeam => "👥",
    }
}

/// Describe a recent record as a feed entry.
pub fn to_activity(record: &RecentRecord) -> Activity {
    let description = match &record.detail {
        RecordDetail::Equipment { is_scrapped: true } => {
            format!("Equipment \"{}\" was scrapped", record.label)
        }
        RecordDetail::Equipment { .. } if record.is_new() => {
            format!("New equipment \"{}\" registered", record.label)
        }
        RecordDetail::Equipment { .. } => format!("Equipment \"{}\" updated", record.label),
        RecordDetail::Request { status } if record.is_new() => {
            format!("New request \"{}\" created ({status})", record.label)
        }
        RecordDetail::Request { status } => {
            format!("Request \"{}\" moved to {status}", record.label)
        }
        RecordDetail::Team { is_active: false } => {
            format!("Team \"{}\" deactivated", record.label)
        }
        RecordDetail::Team { .. } if record.is_new() => {
            format!("Team \"{}\" created", record.label)
        }
        RecordDetail::Team { .. } => format!("Team \"{}\" updated", record.label),
    };

    Activity {
        icon: icon_for(record.kind()).to_string(),
        description,
        timestamp: record.updated_at,
    }
}
