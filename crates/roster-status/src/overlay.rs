//! The availability overlay: schedule names → live `AgentStatus`.

use std::collections::HashMap;

use tracing::debug;

use roster_core::AgentStatus;

use crate::provider::StatusProvider;
use crate::{StatusError, StatusResult};

/// Resolves each scheduled agent to a live status via the provider
/// directory.
///
/// The directory is fetched once per call and indexed by upper-cased sheet
/// name — schedule cells are upper-cased for publication, and provider
/// names arrive mixed-case, so the join is case-insensitive.  Status
/// lookups are one round trip per agent, which is fine at support-team
/// headcounts.
pub struct AvailabilityOverlay<P: StatusProvider> {
    provider: P,
    role: String,
}

impl<P: StatusProvider> AvailabilityOverlay<P> {
    pub fn new(provider: P, role: &str) -> Self {
        Self { provider, role: role.to_string() }
    }

    /// Live status for every agent in `agents`, keyed by the schedule's
    /// spelling of the name.
    ///
    /// A schedule agent missing from the directory is
    /// [`StatusError::AgentLookup`] — the schedule and the provider have
    /// drifted apart and the run must not publish a partial view.
    pub fn fetch_statuses(
        &self,
        agents: &[String],
    ) -> StatusResult<HashMap<String, AgentStatus>> {
        let directory = self.provider.directory(&self.role)?;
        let by_name: HashMap<String, u64> = directory
            .iter()
            .map(|u| (u.sheet_name().to_uppercase(), u.id))
            .collect();

        let mut statuses = HashMap::with_capacity(agents.len());
        for agent in agents {
            let id = by_name
                .get(&agent.to_uppercase())
                .ok_or_else(|| StatusError::AgentLookup { agent: agent.clone() })?;
            let token = self.provider.status_token(*id)?;
            let status = AgentStatus::from_provider_token(&token);
            debug!(%agent, %token, %status, "overlaid live status");
            statuses.insert(agent.clone(), status);
        }
        Ok(statuses)
    }
}
