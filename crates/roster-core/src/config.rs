//! Run configuration.
//!
//! Everything a reconciliation run needs is carried in one `RosterConfig`
//! value, built once at startup and handed to each component's constructor.
//! Components never read environment variables or other process-global
//! state themselves.

use serde::{Deserialize, Serialize};

/// Top-level configuration for one reconciler instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Name of the published dashboard dataset.
    pub dataset_name: String,
    /// Base URL of the dashboard API.
    pub dashboard_base_url: String,
    /// Dashboard API key (basic-auth username, empty password).
    pub dashboard_api_key: String,

    /// Base URL of the spreadsheet values API.
    pub sheet_base_url: String,
    /// Spreadsheet document id holding the schedule.
    pub sheet_id: String,
    /// API key for the values API.
    pub sheet_api_key: String,
    /// Named range containing the single time-axis row.
    pub timeline_range: String,
    /// Named range containing the per-agent schedule rows.
    pub schedules_range: String,

    /// Base URL of the ticketing platform API.
    pub ticketing_base_url: String,
    /// Ticketing API login (email for email/token basic auth).
    pub ticketing_email: String,
    /// Ticketing API token.
    pub ticketing_token: String,
    /// Role filter for the directory lookup (only these users are agents).
    pub agent_role: String,

    /// Offset east of UTC, in minutes, of the timezone the schedule sheet
    /// is written in.  E.g. `-300` for UTC-5.
    pub utc_offset_minutes: i32,
    /// Timeout applied to every HTTP call, in seconds.
    pub http_timeout_secs: u64,
    /// Log the full merged dataset before publishing.
    pub debug: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            dataset_name: "agents.active_groups".to_string(),
            dashboard_base_url: "https://api.geckoboard.com".to_string(),
            dashboard_api_key: String::new(),
            sheet_base_url: "https://sheets.googleapis.com".to_string(),
            sheet_id: String::new(),
            sheet_api_key: String::new(),
            timeline_range: "ScheduleTimeline".to_string(),
            schedules_range: "AgentSchedules".to_string(),
            ticketing_base_url: String::new(),
            ticketing_email: String::new(),
            ticketing_token: String::new(),
            agent_role: "agent".to_string(),
            utc_offset_minutes: 0,
            http_timeout_secs: 30,
            debug: false,
        }
    }
}
