//! In-memory record store with query accounting and failure injection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use async_trait::async_trait;

use super::{
    EntityKind, RecentCriteria, RecentRecord, RecordDetail, RecordFilter, RecordStore, StoreError,
};
use crate::models::equipment::Equipment;
use crate::models::maintenance_request::MaintenanceRequest;
use crate::models::team::MaintenanceTeam;
use crate::models::user::{User, UserRole};

#[derive(Debug, Default)]
struct Records {
    equipment: Vec<Equipment>,
    requests: Vec<MaintenanceRequest>,
    teams: Vec<MaintenanceTeam>,
    users: Vec<User>,
}

/// Failure injected into subsequent queries.
#[derive(Debug, Clone)]
enum Failure {
    All(String),
    Entity(EntityKind, String),
}

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Records>,
    calls: AtomicUsize,
    calls_by_kind: Mutex<HashMap<EntityKind, usize>>,
    failure: Mutex<Option<Failure>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_equipment(&self, equipment: Equipment) {
        self.write().equipment.push(equipment);
    }

    pub fn insert_request(&self, request: MaintenanceRequest) {
        self.write().requests.push(request);
    }

    pub fn insert_team(&self, team: MaintenanceTeam) {
        self.write().teams.push(team);
    }

    pub fn insert_user(&self, user: User) {
        self.write().users.push(user);
    }

    /// Total number of queries issued, pings included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of count/find_recent queries issued against one entity.
    pub fn calls_for(&self, kind: EntityKind) -> usize {
        self.calls_by_kind
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    /// Make every following query fail with `message`.
    pub fn fail_all(&self, message: impl Into<String>) {
        self.set_failure(Some(Failure::All(message.into())));
    }

    /// Make following queries against `kind` fail with `message`.
    pub fn fail_on(&self, kind: EntityKind, message: impl Into<String>) {
        self.set_failure(Some(Failure::Entity(kind, message.into())));
    }

    pub fn recover(&self) {
        self.set_failure(None);
    }

    fn set_failure(&self, failure: Option<Failure>) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = failure;
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn record_call(&self, kind: Option<EntityKind>) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(kind) = kind {
            *self
                .calls_by_kind
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entry(kind)
                .or_insert(0) += 1;
        }

        let failure = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match failure {
            Some(Failure::All(msg)) => Err(StoreError::Unavailable(msg)),
            Some(Failure::Entity(failing, msg)) if Some(failing) == kind => {
                Err(StoreError::Unavailable(msg))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn count(&self, kind: EntityKind, filter: &RecordFilter) -> Result<i64, StoreError> {
        self.record_call(Some(kind))?;
        if !filter.applies_to(kind) {
            return Err(StoreError::InvalidFilter {
                kind,
                filter: filter.clone(),
            });
        }

        let records = self.read();
        let count = match (kind, filter) {
            (EntityKind::Equipment, _) => records.equipment.len(),
            (EntityKind::MaintenanceRequest, RecordFilter::StatusIn(statuses)) => records
                .requests
                .iter()
                .filter(|r| statuses.contains(&r.status))
                .count(),
            (EntityKind::MaintenanceRequest, _) => records.requests.len(),
            (EntityKind::MaintenanceTeam, RecordFilter::TeamActive(active)) => records
                .teams
                .iter()
                .filter(|t| t.is_active == *active)
                .count(),
            (EntityKind::MaintenanceTeam, _) => records.teams.len(),
        };
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn find_recent(
        &self,
        criteria: &RecentCriteria,
        limit: usize,
    ) -> Result<Vec<RecentRecord>, StoreError> {
        self.record_call(Some(criteria.kind))?;

        let records = self.read();
        let mut recent: Vec<RecentRecord> = match criteria.kind {
            EntityKind::Equipment => records
                .equipment
                .iter()
                .map(|e| RecentRecord {
                    id: e.id,
                    label: e.name.clone(),
                    detail: RecordDetail::Equipment {
                        is_scrapped: e.is_scrapped,
                    },
                    created_at: e.created_at,
                    updated_at: e.updated_at,
                })
                .collect(),
            EntityKind::MaintenanceRequest => records
                .requests
                .iter()
                .map(|r| RecentRecord {
                    id: r.id,
                    label: r.subject.clone(),
                    detail: RecordDetail::Request { status: r.status },
                    created_at: r.created_at,
                    updated_at: r.updated_at,
                })
                .collect(),
            EntityKind::MaintenanceTeam => records
                .teams
                .iter()
                .map(|t| RecentRecord {
                    id: t.id,
                    label: t.name.clone(),
                    detail: RecordDetail::Team {
                        is_active: t.is_active,
                    },
                    created_at: t.created_at,
                    updated_at: t.updated_at,
                })
                .collect(),
        };

        recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recent.truncate(limit);
        Ok(recent)
    }

    async fn find_users(&self, roles: &[UserRole]) -> Result<Vec<User>, StoreError> {
        self.record_call(None)?;

        let mut users: Vec<User> = self
            .read()
            .users
            .iter()
            .filter(|u| roles.contains(&u.role))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.record_call(None)
    }
}
