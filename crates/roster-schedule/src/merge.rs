//! The merge step: current group assignment × live status → output records.

use std::collections::HashMap;

use roster_core::{AgentStatus, OutputRecord};

use crate::{ScheduleError, ScheduleResult};

/// Combine the current-timeblock group assignment with the live status
/// overlay into the final record list.
///
/// Every scheduled agent must have a status entry; a miss means the overlay
/// step was skipped or the directory drifted out of sync with the sheet, and
/// is surfaced as [`ScheduleError::StatusMissing`] rather than silently
/// defaulted.
///
/// # Ordering contract
///
/// Records are sorted by status label, descending, so active agents surface
/// at the top of the dashboard.  The sort is stable: agents with the same
/// status keep their incoming (schedule row) order.  Identical inputs always
/// produce identical output.
pub fn merge(
    groups: &[(String, String)],
    statuses: &HashMap<String, AgentStatus>,
) -> ScheduleResult<Vec<OutputRecord>> {
    let mut records = Vec::with_capacity(groups.len());
    for (agent, group) in groups {
        let status = statuses
            .get(agent)
            .ok_or_else(|| ScheduleError::StatusMissing { agent: agent.clone() })?;
        records.push(OutputRecord::new(agent, group).with_status(*status));
    }

    // Vec::sort_by is stable, which the tiebreak contract relies on.
    records.sort_by(|a, b| b.status.cmp(&a.status));
    Ok(records)
}
