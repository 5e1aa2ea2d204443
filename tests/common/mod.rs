//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use gearguard::config::AppConfig;
use gearguard::models::equipment::Equipment;
use gearguard::models::maintenance_request::{MaintenanceRequest, RequestStatus, RequestType};
use gearguard::models::team::{MaintenanceTeam, TeamType};
use gearguard::models::user::{User, UserRole};
use gearguard::services::auth::issue_access_token;
use gearguard::store::InMemoryRecordStore;
use gearguard::AppState;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-jwt-secret-for-integration-tests-only";

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: JWT_SECRET.to_string(),
        frontend_url: "http://localhost:5173".to_string(),
        activity_feed_limit: 20,
    }
}

pub fn state_with(store: Arc<InMemoryRecordStore>) -> AppState {
    AppState {
        store,
        config: test_config(),
    }
}

pub fn token(role: UserRole) -> String {
    issue_access_token(Uuid::new_v4(), "tester", role, JWT_SECRET, 900).expect("token")
}

pub fn equipment(name: &str, minutes_ago: i64) -> Equipment {
    let at = Utc::now() - Duration::minutes(minutes_ago);
    Equipment {
        id: Uuid::new_v4(),
        name: name.to_string(),
        serial_number: format!("SN-{name}"),
        category: "Machinery".to_string(),
        department: Some("Production".to_string()),
        location: None,
        is_scrapped: false,
        created_at: at,
        updated_at: at,
    }
}

pub fn request(subject: &str, status: RequestStatus, minutes_ago: i64) -> MaintenanceRequest {
    let updated_at = Utc::now() - Duration::minutes(minutes_ago);
    MaintenanceRequest {
        id: Uuid::new_v4(),
        subject: subject.to_string(),
        equipment_id: None,
        team_id: None,
        request_type: RequestType::Corrective,
        status,
        scheduled_date: None,
        created_at: updated_at - Duration::hours(1),
        updated_at,
    }
}

pub fn team(name: &str, is_active: bool, minutes_ago: i64) -> MaintenanceTeam {
    let at = Utc::now() - Duration::minutes(minutes_ago);
    MaintenanceTeam {
        id: Uuid::new_v4(),
        name: name.to_string(),
        team_type: TeamType::Mechanics,
        is_active,
        created_at: at,
        updated_at: at,
    }
}

pub fn user(name: &str, role: UserRole, department: Option<&str>) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@gearguard.local", name.to_lowercase()),
        role,
        department: department.map(str::to_string),
    }
}

/// 5 equipment, requests in New/In Progress/Repaired, 2 active teams + 1 inactive,
/// and four users across roles and departments.
pub fn seeded_store() -> Arc<InMemoryRecordStore> {
    let store = Arc::new(InMemoryRecordStore::new());
    for (i, name) in ["Lathe", "Press", "Drill", "Forklift", "Printer"].iter().enumerate() {
        store.insert_equipment(equipment(name, 100 + i as i64));
    }
    store.insert_request(request("Spindle vibration", RequestStatus::New, 5));
    store.insert_request(request("Oil leak", RequestStatus::InProgress, 3));
    store.insert_request(request("Filter change", RequestStatus::Repaired, 1));
    store.insert_team(team("Mechanics Crew", true, 300));
    store.insert_team(team("IT Helpdesk", true, 400));
    store.insert_team(team("Legacy Plumbing", false, 500));
    store.insert_user(user("Tomas", UserRole::Technician, Some("Mechanical Workshop")));
    store.insert_user(user("Priya", UserRole::Technician, Some("IT")));
    store.insert_user(user("Marta", UserRole::Manager, Some("Maintenance")));
    store.insert_user(user("Ugo", UserRole::User, Some("Maintenance")));
    store
}
