//! The reconciliation pipeline.
//!
//! One invocation is a single linear pass with no retries and no state
//! carried between runs:
//!
//! ```text
//! ping → fetch axis + rows → resolve timeblock → current groups
//!      → overlay live statuses → merge → ensure dataset → replace data
//! ```
//!
//! Every stage failure aborts the run before anything is written, so the
//! dashboard only ever sees complete datasets.

use tracing::{debug, info};

use roster_core::{CoreResult, ReportingClock, RosterConfig};
use roster_publish::{DatasetPublisher, roster_schema};
use roster_schedule::{ScheduleSource, ScheduleTable, merge, parse_axis, resolve_current_index};
use roster_status::{AvailabilityOverlay, StatusProvider};

use crate::error::PipelineResult;

/// Wires the three collaborators together and drives one run.
pub struct Reconciler<S, P, D>
where
    S: ScheduleSource,
    P: StatusProvider,
    D: DatasetPublisher,
{
    source: S,
    overlay: AvailabilityOverlay<P>,
    publisher: D,
    clock: ReportingClock,
    dataset_name: String,
    debug: bool,
}

impl<S, P, D> Reconciler<S, P, D>
where
    S: ScheduleSource,
    P: StatusProvider,
    D: DatasetPublisher,
{
    pub fn new(config: &RosterConfig, source: S, provider: P, publisher: D) -> CoreResult<Self> {
        Ok(Self {
            source,
            overlay: AvailabilityOverlay::new(provider, &config.agent_role),
            publisher,
            clock: ReportingClock::from_offset_minutes(config.utc_offset_minutes)?,
            dataset_name: config.dataset_name.clone(),
            debug: config.debug,
        })
    }

    /// Reconcile and publish.  Returns the number of rows published.
    pub fn run(&self) -> PipelineResult<usize> {
        self.run_for_hour(self.clock.current_hour())
    }

    /// Like [`run`](Self::run) with the current hour pinned, so a full run
    /// is testable against a fixed instant.
    pub fn run_for_hour(&self, hour: u8) -> PipelineResult<usize> {
        self.publisher.ping()?;

        info!(hour, "resolving current timeblock");
        let axis = parse_axis(&self.source.time_axis_row()?)?;
        let timeblock = resolve_current_index(&axis, hour)?;

        let table = ScheduleTable::from_rows(self.source.schedule_rows()?)?;
        let groups = table.current_groups(timeblock);
        info!(timeblock, agents = groups.len(), "mapped scheduled groups");

        let agents: Vec<String> = groups.iter().map(|(agent, _)| agent.clone()).collect();
        let statuses = self.overlay.fetch_statuses(&agents)?;
        let records = merge(&groups, &statuses)?;
        if self.debug {
            info!("merged dataset: {records:?}");
        } else {
            debug!("merged dataset: {records:?}");
        }

        self.publisher.find_or_create(&self.dataset_name, &roster_schema())?;
        self.publisher.replace(&self.dataset_name, &records)?;
        info!(dataset = %self.dataset_name, rows = records.len(), "dataset updated");
        Ok(records.len())
    }

    /// Delete the published dataset.  Reads nothing from the schedule or
    /// status sources.
    pub fn reset(&self) -> PipelineResult<()> {
        self.publisher.ping()?;
        self.publisher.delete(&self.dataset_name)?;
        info!(dataset = %self.dataset_name, "dataset deleted");
        Ok(())
    }
}
