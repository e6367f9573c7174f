//! The per-agent schedule table.
//!
//! Each raw row is `[agent_id, group_1, group_2, …]` with one group cell per
//! time-axis column.  Spreadsheet rows are routinely ragged — an agent whose
//! week ends early simply has fewer cells — so an out-of-range timeblock
//! resolves to an empty group rather than failing the whole run.

use std::collections::HashMap;

use crate::{ScheduleError, ScheduleResult};

/// Raw schedule rows, as fetched from the source.
#[derive(Clone, Debug)]
pub struct ScheduleTable {
    rows: Vec<Vec<String>>,
}

impl ScheduleTable {
    /// Wrap raw rows, rejecting an empty row set.
    pub fn from_rows(rows: Vec<Vec<String>>) -> ScheduleResult<Self> {
        if rows.is_empty() {
            return Err(ScheduleError::EmptySource { what: "agent schedules".to_string() });
        }
        Ok(Self { rows })
    }

    /// Number of raw rows (including any duplicate agent ids).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The scheduled group of every agent at `timeblock`, in row order.
    ///
    /// - Rows shorter than `timeblock + 1` group cells yield `""`.
    /// - Rows with no cells at all are skipped.
    /// - A duplicate agent id keeps its first occurrence's position but
    ///   takes its last occurrence's group (insertion-order map semantics,
    ///   matching the upstream sheet's informal "later rows override"
    ///   convention).
    pub fn current_groups(&self, timeblock: usize) -> Vec<(String, String)> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(self.rows.len());
        let mut groups: Vec<(String, String)> = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let Some(agent) = row.first() else { continue };
            // Cell 0 is the agent id; group cells start at 1.
            let group = row.get(1 + timeblock).cloned().unwrap_or_default();

            match seen.get(agent.as_str()) {
                Some(&at) => groups[at].1 = group,
                None => {
                    seen.insert(agent.as_str(), groups.len());
                    groups.push((agent.clone(), group));
                }
            }
        }
        groups
    }
}
