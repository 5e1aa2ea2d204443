use std::env;

/// Default number of entries returned by the recent-activity feed.
pub const DEFAULT_ACTIVITY_FEED_LIMIT: usize = 20;

/// Upper bound on the recent-activity feed, whatever the environment says.
pub const MAX_ACTIVITY_FEED_LIMIT: usize = 100;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub frontend_url: String,
    pub activity_feed_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            jwt_secret: env::var("JWT_SECRET")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            activity_feed_limit: clamp_feed_limit(
                env::var("ACTIVITY_FEED_LIMIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_ACTIVITY_FEED_LIMIT),
            ),
        })
    }
}

/// Keep the activity feed bounded to `1..=MAX_ACTIVITY_FEED_LIMIT`.
pub fn clamp_feed_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_ACTIVITY_FEED_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_limit_is_clamped() {
        assert_eq!(clamp_feed_limit(0), 1);
        assert_eq!(clamp_feed_limit(20), 20);
        assert_eq!(clamp_feed_limit(5000), MAX_ACTIVITY_FEED_LIMIT);
    }
}
