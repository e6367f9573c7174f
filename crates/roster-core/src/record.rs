//! The published row shape.
//!
//! One `OutputRecord` per scheduled agent.  Field names here must match the
//! dataset schema declared in `roster-publish` exactly — the dashboard API
//! rejects rows whose keys differ from the registered schema.

use serde::Serialize;

use crate::AgentStatus;

/// Group label used when an agent's scheduled group cell is empty.
pub const GROUP_FALLBACK: &str = "OTHER";

/// One row of the published dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    /// Agent display name, upper-cased.
    pub agent: String,
    /// Scheduled group for the current timeblock, upper-cased.
    /// Empty schedule cells become [`GROUP_FALLBACK`].
    pub group: String,
    /// Live status label.  Empty string until the overlay step fills it in.
    pub status: String,
}

impl OutputRecord {
    /// Build a record from raw schedule cells, applying normalization.
    pub fn new(agent: &str, group: &str) -> Self {
        let group = group.trim();
        Self {
            agent: agent.to_uppercase(),
            group: if group.is_empty() {
                GROUP_FALLBACK.to_string()
            } else {
                group.to_uppercase()
            },
            status: String::new(),
        }
    }

    /// Fill in the live status label.
    pub fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = status.label().to_string();
        self
    }
}
