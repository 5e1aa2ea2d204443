//! HTTP client for the stats endpoints.
//!
//! Successful (2xx) responses are returned as the decoded envelope without
//! looking at its `success` flag; every failure is logged and handed back to
//! the caller.

use std::env;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::errors::ApiResponse;
use crate::models::activity::Activity;
use crate::services::stats::DashboardStats;
use crate::view::dashboard::DashboardSource;

/// Where the client finds the API and which token it presents.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("GEARGUARD_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api".to_string()),
            token: env::var("GEARGUARD_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    #[error("Undecodable response body ({status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl StatsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
        }
    }

    /// GET /stats/dashboard
    pub async fn get_dashboard_stats(&self) -> Result<ApiResponse<DashboardStats>, ClientError> {
        self.get_envelope("/stats/dashboard")
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error fetching dashboard stats");
                e
            })
    }

    /// GET /stats/activities
    pub async fn get_recent_activities(
        &self,
    ) -> Result<ApiResponse<Vec<Activity>>, ClientError> {
        self.get_envelope("/stats/activities")
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error fetching recent activities");
                e
            })
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, ClientError> {
        let mut request = self.http.get(format!("{}{path}", self.base_url));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            status: status.as_u16(),
            source,
        })
    }
}

#[async_trait]
impl DashboardSource for StatsClient {
    async fn dashboard_stats(&self) -> Result<ApiResponse<DashboardStats>, ClientError> {
        self.get_dashboard_stats().await
    }

    async fn recent_activities(&self) -> Result<ApiResponse<Vec<Activity>>, ClientError> {
        self.get_recent_activities().await
    }
}
