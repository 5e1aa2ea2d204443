//! Dashboard view model: two independent fetch tracks and their rendering.
//!
//! The stats counters and the activity feed each own a [`FetchState`]. Mounting
//! starts both fetches at once and settles each track as soon as its own
//! response arrives. The mount future borrows the view mutably, so dropping it
//! (navigating away) cancels both fetches and no update lands after teardown.

use std::fmt::Write as _;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::client::ClientError;
use crate::errors::ApiResponse;
use crate::models::activity::Activity;
use crate::services::stats::DashboardStats;
use crate::view::relative_time::format_relative;

/// Placeholder shown for a counter that has no data yet.
pub const PLACEHOLDER: &str = "...";

/// Lifecycle of one fetch track.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Where the dashboard gets its data from.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn dashboard_stats(&self) -> Result<ApiResponse<DashboardStats>, ClientError>;

    async fn recent_activities(&self) -> Result<ApiResponse<Vec<Activity>>, ClientError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    user_name: Option<String>,
    stats: FetchState<DashboardStats>,
    activities: FetchState<Vec<Activity>>,
}

impl DashboardView {
    pub fn new(user_name: Option<String>) -> Self {
        Self {
            user_name,
            stats: FetchState::Idle,
            activities: FetchState::Idle,
        }
    }

    pub fn stats(&self) -> &FetchState<DashboardStats> {
        &self.stats
    }

    pub fn activities(&self) -> &FetchState<Vec<Activity>> {
        &self.activities
    }

    /// Fetch both tracks concurrently, settling each one independently.
    pub async fn mount(&mut self, source: &dyn DashboardSource) {
        self.stats = FetchState::Loading;
        self.activities = FetchState::Loading;

        let mut stats_fetch = source.dashboard_stats();
        let mut activities_fetch = source.recent_activities();
        let mut stats_done = false;
        let mut activities_done = false;

        while !(stats_done && activities_done) {
            tokio::select! {
                result = &mut stats_fetch, if !stats_done => {
                    stats_done = true;
                    self.apply_stats(result);
                }
                result = &mut activities_fetch, if !activities_done => {
                    activities_done = true;
                    self.apply_activities(result);
                }
            }
        }
    }

    pub fn apply_stats(&mut self, result: Result<ApiResponse<DashboardStats>, ClientError>) {
        self.stats = settle("dashboard stats", result);
    }

    pub fn apply_activities(&mut self, result: Result<ApiResponse<Vec<Activity>>, ClientError>) {
        self.activities = settle("recent activities", result);
    }

    /// Counter cards as `(label, display value)` pairs.
    pub fn counters(&self) -> [(&'static str, String); 4] {
        let show = |pick: fn(&DashboardStats) -> i64| match &self.stats {
            FetchState::Idle => "0".to_string(),
            FetchState::Loaded(stats) => pick(stats).to_string(),
            FetchState::Loading | FetchState::Failed(_) => PLACEHOLDER.to_string(),
        };
        [
            ("Total Equipment", show(|s| s.total_equipment)),
            ("Active Requests", show(|s| s.active_requests)),
            ("Completed", show(|s| s.completed_requests)),
            ("Maintenance Teams", show(|s| s.total_teams)),
        ]
    }

    /// Activity feed lines, each with its timestamp relative to `now`.
    pub fn activity_lines(&self, now: DateTime<Utc>) -> Vec<String> {
        match &self.activities {
            FetchState::Idle => vec!["No recent activity".to_string()],
            FetchState::Loading | FetchState::Failed(_) => vec![PLACEHOLDER.to_string()],
            FetchState::Loaded(items) if items.is_empty() => {
                vec!["No recent activity".to_string()]
            }
            FetchState::Loaded(items) => items
                .iter()
                .map(|a| {
                    format!(
                        "{} {} · {}",
                        a.icon,
                        a.description,
                        format_relative(a.timestamp, now)
                    )
                })
                .collect(),
        }
    }

    /// Plain-text rendering of the whole dashboard.
    pub fn render(&self, now: DateTime<Utc>) -> String {
        let mut out = String::new();
        let name = self.user_name.as_deref().unwrap_or("there");
        let _ = writeln!(out, "Welcome, {name}! 👋");
        let _ = writeln!(out);

        for (label, value) in self.counters() {
            let _ = writeln!(out, "{label:<20}{value:>8}");
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Recent Activity");
        for line in self.activity_lines(now) {
            let _ = writeln!(out, "  {line}");
        }
        out
    }
}

fn settle<T>(what: &str, result: Result<ApiResponse<T>, ClientError>) -> FetchState<T> {
    match result {
        Ok(ApiResponse {
            success: true,
            data: Some(data),
            ..
        }) => FetchState::Loaded(data),
        Ok(envelope) => {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("Unsuccessful {what} response"));
            tracing::error!(%message, "Failed to load {what}");
            FetchState::Failed(message)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load {what}");
            FetchState::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn stats() -> DashboardStats {
        DashboardStats {
            total_equipment: 5,
            active_requests: 2,
            completed_requests: 1,
            total_teams: 2,
        }
    }

    fn ok<T>(data: T) -> Result<ApiResponse<T>, ClientError> {
        Ok(ApiResponse {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        })
    }

    fn values(view: &DashboardView) -> Vec<String> {
        view.counters().into_iter().map(|(_, v)| v).collect()
    }

    #[test]
    fn idle_view_shows_zero_defaults() {
        let view = DashboardView::new(Some("Dana".to_string()));
        assert_eq!(values(&view), vec!["0", "0", "0", "0"]);
        assert_eq!(
            view.activity_lines(Utc::now()),
            vec!["No recent activity".to_string()]
        );
    }

    #[test]
    fn loaded_stats_render_counts() {
        let mut view = DashboardView::new(None);
        view.apply_stats(ok(stats()));
        assert_eq!(values(&view), vec!["5", "2", "1", "2"]);
        assert_eq!(view.stats().loaded(), Some(&stats()));
    }

    #[test]
    fn unsuccessful_envelope_fails_the_track_without_zero_fill() {
        let mut view = DashboardView::new(None);
        view.apply_stats(Ok(ApiResponse {
            success: false,
            data: None,
            message: Some("Error fetching dashboard statistics".to_string()),
            error: Some("pool timed out".to_string()),
        }));
        assert_eq!(
            view.stats(),
            &FetchState::Failed("Error fetching dashboard statistics".to_string())
        );
        assert_eq!(values(&view), vec![PLACEHOLDER; 4]);
    }

    #[test]
    fn failed_stats_leave_activities_untouched() {
        let mut view = DashboardView::new(None);
        view.apply_activities(ok(Vec::new()));
        view.apply_stats(Err(ClientError::Status {
            status: 500,
            message: None,
        }));
        assert!(matches!(view.stats(), FetchState::Failed(_)));
        assert_eq!(view.activities(), &FetchState::Loaded(Vec::new()));
    }

    #[test]
    fn activity_lines_use_relative_time() {
        let now = Utc::now();
        let mut view = DashboardView::new(None);
        view.apply_activities(ok(vec![Activity {
            icon: "📝".to_string(),
            description: "Request \"Oil leak\" moved to Repaired".to_string(),
            timestamp: now - Duration::minutes(150),
        }]));
        assert_eq!(
            view.activity_lines(now),
            vec!["📝 Request \"Oil leak\" moved to Repaired · 2 hours ago".to_string()]
        );
    }

    #[test]
    fn render_includes_greeting_and_sections() {
        let mut view = DashboardView::new(Some("Dana".to_string()));
        view.apply_stats(ok(stats()));
        let text = view.render(Utc::now());
        assert!(text.starts_with("Welcome, Dana! 👋"));
        assert!(text.contains("Total Equipment"));
        assert!(text.contains("Recent Activity"));
    }
}
