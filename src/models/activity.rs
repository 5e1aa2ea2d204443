//! Recent-activity feed entries shown on the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the dashboard activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub icon: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}
