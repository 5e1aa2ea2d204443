//! End-to-end: the stats client and dashboard view against a live server.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use gearguard::client::{ClientConfig, ClientError, StatsClient};
use gearguard::errors::ApiResponse;
use gearguard::models::activity::Activity;
use gearguard::models::user::UserRole;
use gearguard::routes;
use gearguard::services::stats::DashboardStats;
use gearguard::store::{EntityKind, InMemoryRecordStore};
use gearguard::view::dashboard::{DashboardSource, DashboardView, FetchState, PLACEHOLDER};
use tokio::net::TcpListener;

use common::{seeded_store, state_with, token};

/// Serve the router on a random local port and return the API base URL.
async fn start_server(store: Arc<InMemoryRecordStore>) -> String {
    let app = routes::router(state_with(store));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{addr}/api")
}

fn client(base_url: String, role: Option<UserRole>) -> StatsClient {
    StatsClient::new(ClientConfig {
        base_url,
        token: role.map(token),
    })
}

#[tokio::test]
async fn client_passes_success_envelope_through() {
    let base = start_server(seeded_store()).await;
    let client = client(base, Some(UserRole::Technician));

    let envelope = client.get_dashboard_stats().await.unwrap();
    assert!(envelope.success);
    assert_eq!(
        envelope.data,
        Some(DashboardStats {
            total_equipment: 5,
            active_requests: 2,
            completed_requests: 1,
            total_teams: 2,
        })
    );

    let activities = client.get_recent_activities().await.unwrap();
    assert!(activities.success);
    assert_eq!(activities.data.unwrap().len(), 11);
}

#[tokio::test]
async fn client_surfaces_server_failure() {
    let store = seeded_store();
    store.fail_on(EntityKind::Equipment, "disk on fire");
    let base = start_server(store).await;

    let err = client(base, Some(UserRole::Technician))
        .get_dashboard_stats()
        .await
        .unwrap_err();
    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message.as_deref(), Some("Error fetching dashboard statistics"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn client_surfaces_auth_rejection() {
    let base = start_server(seeded_store()).await;
    let err = client(base, None).get_dashboard_stats().await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 401, .. }));
}

#[tokio::test]
async fn client_surfaces_transport_failure() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}/api"), Some(UserRole::User))
        .get_dashboard_stats()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn mounted_view_renders_live_data() {
    let base = start_server(seeded_store()).await;
    let client = client(base, Some(UserRole::Technician));

    let mut view = DashboardView::new(Some("Dana".to_string()));
    view.mount(&client).await;

    let values: Vec<String> = view.counters().into_iter().map(|(_, v)| v).collect();
    assert_eq!(values, vec!["5", "2", "1", "2"]);
    let lines = view.activity_lines(Utc::now());
    assert_eq!(lines.len(), 11);
    assert!(lines[0].ends_with("1 minute ago"));
}

#[tokio::test]
async fn failed_stats_track_keeps_placeholders() {
    let store = seeded_store();
    store.fail_on(EntityKind::MaintenanceTeam, "timeout");
    let base = start_server(store).await;

    let mut view = DashboardView::new(None);
    view.mount(&client(base, Some(UserRole::Technician))).await;

    // Team counting fails the stats track; the activity feed (which also
    // reads teams) fails on its own, independently.
    assert!(matches!(view.stats(), FetchState::Failed(_)));
    let values: Vec<String> = view.counters().into_iter().map(|(_, v)| v).collect();
    assert_eq!(values, vec![PLACEHOLDER; 4]);
    assert!(matches!(view.activities(), FetchState::Failed(_)));
}

/// Source whose activity fetch never completes.
struct StalledActivities;

#[async_trait]
impl DashboardSource for StalledActivities {
    async fn dashboard_stats(&self) -> Result<ApiResponse<DashboardStats>, ClientError> {
        Ok(ApiResponse {
            success: true,
            data: Some(DashboardStats::default()),
            message: None,
            error: None,
        })
    }

    async fn recent_activities(&self) -> Result<ApiResponse<Vec<Activity>>, ClientError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn tracks_settle_independently_and_unmount_cancels() {
    let mut view = DashboardView::new(None);

    let mounted = tokio::time::timeout(Duration::from_millis(50), view.mount(&StalledActivities)).await;
    assert!(mounted.is_err(), "mount should still be waiting on activities");

    // Stats settled on their own; the abandoned activity track stays loading
    // and nothing can update it after the mount future was dropped.
    assert_eq!(view.stats(), &FetchState::Loaded(DashboardStats::default()));
    assert!(view.activities().is_loading());
    assert_eq!(view.activity_lines(Utc::now()), vec![PLACEHOLDER.to_string()]);
}
