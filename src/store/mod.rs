//! Record store seam: count and recent-record queries over persisted entities.
//!
//! The aggregator only ever talks to [`RecordStore`]; the PostgreSQL adapter is
//! what the server runs against, the in-memory adapter backs tests and demos.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::maintenance_request::RequestStatus;
use crate::models::user::{User, UserRole};

pub use memory::InMemoryRecordStore;
pub use postgres::PgRecordStore;

/// Persisted record types the dashboard reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Equipment,
    MaintenanceRequest,
    MaintenanceTeam,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Equipment => "equipment",
            Self::MaintenanceRequest => "maintenance_request",
            Self::MaintenanceTeam => "maintenance_team",
        };
        f.write_str(name)
    }
}

/// Predicate applied by [`RecordStore::count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Every record of the entity.
    All,
    /// Maintenance requests whose status is one of the listed values.
    StatusIn(Vec<RequestStatus>),
    /// Maintenance teams with the given `is_active` flag.
    TeamActive(bool),
}

impl RecordFilter {
    /// Whether the filter can be evaluated against the given entity.
    pub fn applies_to(&self, kind: EntityKind) -> bool {
        match self {
            Self::All => true,
            Self::StatusIn(_) => kind == EntityKind::MaintenanceRequest,
            Self::TeamActive(_) => kind == EntityKind::MaintenanceTeam,
        }
    }
}

/// Selection for [`RecordStore::find_recent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentCriteria {
    pub kind: EntityKind,
}

impl RecentCriteria {
    pub fn of(kind: EntityKind) -> Self {
        Self { kind }
    }
}

/// Entity-specific state carried by a recent record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDetail {
    Equipment { is_scrapped: bool },
    Request { status: RequestStatus },
    Team { is_active: bool },
}

/// A recently created or modified record, newest-first in query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentRecord {
    pub id: Uuid,
    pub label: String,
    pub detail: RecordDetail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecentRecord {
    pub fn kind(&self) -> EntityKind {
        match self.detail {
            RecordDetail::Equipment { .. } => EntityKind::Equipment,
            RecordDetail::Request { .. } => EntityKind::MaintenanceRequest,
            RecordDetail::Team { .. } => EntityKind::MaintenanceTeam,
        }
    }

    /// True when the record has not been modified since it was created.
    pub fn is_new(&self) -> bool {
        self.updated_at <= self.created_at
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    #[error("Filter {filter:?} does not apply to {kind}")]
    InvalidFilter { kind: EntityKind, filter: RecordFilter },
}

/// Read-only access to persisted equipment, requests, teams, and users.
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Count records of `kind` matching `filter`.
    async fn count(&self, kind: EntityKind, filter: &RecordFilter) -> Result<i64, StoreError>;

    /// Most recently touched records matching `criteria`, newest first, at most `limit`.
    async fn find_recent(
        &self,
        criteria: &RecentCriteria,
        limit: usize,
    ) -> Result<Vec<RecentRecord>, StoreError>;

    /// Users holding any of `roles`, ordered by name.
    async fn find_users(&self, roles: &[UserRole]) -> Result<Vec<User>, StoreError>;

    /// Connectivity probe for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
