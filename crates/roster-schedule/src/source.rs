//! The schedule source collaborator.
//!
//! [`ScheduleSource`] is the seam the pipeline reads raw sheet data through;
//! [`SheetValuesClient`] is the production implementation against a
//! spreadsheet values API (`GET {base}/v4/spreadsheets/{id}/values/{range}`).
//! Tests substitute an in-memory source.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use roster_core::RosterConfig;

use crate::{ScheduleError, ScheduleResult};

/// Read access to the two named ranges backing a reconciliation run.
pub trait ScheduleSource {
    /// The single row of hour labels defining the time axis.
    fn time_axis_row(&self) -> ScheduleResult<Vec<String>>;

    /// All per-agent schedule rows (`[agent_id, group_1, …]`).
    fn schedule_rows(&self) -> ScheduleResult<Vec<Vec<String>>>;
}

// ── HTTP implementation ───────────────────────────────────────────────────────

/// Wire shape of a values-API response.
#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Blocking client for a spreadsheet values API.
pub struct SheetValuesClient {
    agent: ureq::Agent,
    base_url: String,
    sheet_id: String,
    api_key: String,
    timeline_range: String,
    schedules_range: String,
}

impl SheetValuesClient {
    pub fn new(config: &RosterConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build();
        Self {
            agent,
            base_url: config.sheet_base_url.trim_end_matches('/').to_string(),
            sheet_id: config.sheet_id.clone(),
            api_key: config.sheet_api_key.clone(),
            timeline_range: config.timeline_range.clone(),
            schedules_range: config.schedules_range.clone(),
        }
    }

    fn fetch_range(&self, range: &str) -> ScheduleResult<Vec<Vec<String>>> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.sheet_id, range
        );
        debug!(%range, "fetching sheet range");
        let body: ValueRange = self
            .agent
            .get(&url)
            .query("key", &self.api_key)
            .call()?
            .into_json()?;
        if body.values.is_empty() {
            return Err(ScheduleError::EmptySource { what: range.to_string() });
        }
        Ok(body.values)
    }
}

impl ScheduleSource for SheetValuesClient {
    fn time_axis_row(&self) -> ScheduleResult<Vec<String>> {
        // fetch_range already rejects an empty value set, so row 0 exists.
        let mut values = self.fetch_range(&self.timeline_range)?;
        Ok(values.swap_remove(0))
    }

    fn schedule_rows(&self) -> ScheduleResult<Vec<Vec<String>>> {
        self.fetch_range(&self.schedules_range)
    }
}
