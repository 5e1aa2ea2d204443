//! PostgreSQL-backed record store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    EntityKind, RecentCriteria, RecentRecord, RecordDetail, RecordFilter, RecordStore, StoreError,
};
use crate::models::maintenance_request::RequestStatus;
use crate::models::user::{User, UserRole};

#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn table_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Equipment => "equipment",
        EntityKind::MaintenanceRequest => "maintenance_requests",
        EntityKind::MaintenanceTeam => "maintenance_teams",
    }
}

/// Intermediate row for recent equipment.
#[derive(Debug, sqlx::FromRow)]
struct EquipmentRow {
    id: Uuid,
    name: String,
    is_scrapped: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Intermediate row for recent maintenance requests.
#[derive(Debug, sqlx::FromRow)]
struct RequestRow {
    id: Uuid,
    subject: String,
    status: RequestStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Intermediate row for recent teams.
#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn count(&self, kind: EntityKind, filter: &RecordFilter) -> Result<i64, StoreError> {
        if !filter.applies_to(kind) {
            return Err(StoreError::InvalidFilter {
                kind,
                filter: filter.clone(),
            });
        }

        let table = table_name(kind);
        let count = match filter {
            RecordFilter::All => {
                let sql = format!("SELECT COUNT(*) FROM {table}");
                sqlx::query_scalar::<_, i64>(&sql)
                    .fetch_one(&self.pool)
                    .await?
            }
            RecordFilter::StatusIn(statuses) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM maintenance_requests WHERE status = ANY($1::request_status[])",
                )
                .bind(statuses.as_slice())
                .fetch_one(&self.pool)
                .await?
            }
            RecordFilter::TeamActive(active) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM maintenance_teams WHERE is_active = $1",
                )
                .bind(*active)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(count)
    }

    async fn find_recent(
        &self,
        criteria: &RecentCriteria,
        limit: usize,
    ) -> Result<Vec<RecentRecord>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let records: Vec<RecentRecord> = match criteria.kind {
            EntityKind::Equipment => sqlx::query_as::<_, EquipmentRow>(
                r#"
                SELECT id, name, is_scrapped, created_at, updated_at
                FROM equipment
                ORDER BY updated_at DESC
                LIMIT $1
                "#,
            )
            .bind(limit)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|r| RecentRecord {
                id: r.id,
                label: r.name,
                detail: RecordDetail::Equipment {
                    is_scrapped: r.is_scrapped,
                },
                created_at: r.created_at,
                updated_at: r.updated_at,
            })
            .collect(),
            EntityKind::MaintenanceRequest => sqlx::query_as::<_, RequestRow>(
                r#"
                SELECT id, subject, status, created_at, updated_at
                FROM maintenance_requests
                ORDER BY updated_at DESC
                LIMIT $1
                "#,
            )
            .bind(limit)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|r| RecentRecord {
                id: r.id,
                label: r.subject,
                detail: RecordDetail::Request { status: r.status },
                created_at: r.created_at,
                updated_at: r.updated_at,
            })
            .collect(),
            EntityKind::MaintenanceTeam => sqlx::query_as::<_, TeamRow>(
                r#"
                SELECT id, name, is_active, created_at, updated_at
                FROM maintenance_teams
                ORDER BY updated_at DESC
                LIMIT $1
                "#,
            )
            .bind(limit)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|r| RecentRecord {
                id: r.id,
                label: r.name,
                detail: RecordDetail::Team {
                    is_active: r.is_active,
                },
                created_at: r.created_at,
                updated_at: r.updated_at,
            })
            .collect(),
        };
        Ok(records)
    }

    async fn find_users(&self, roles: &[UserRole]) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, role, department
            FROM users
            WHERE role = ANY($1::user_role[])
            ORDER BY name
            "#,
        )
        .bind(roles)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
