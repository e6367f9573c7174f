//! Live agent availability, as reported by the ticketing platform.
//!
//! The provider speaks in lowercase tokens (`"available"`, `"on_call"`, …).
//! Anything the translation table does not recognise degrades to
//! [`AgentStatus::Unknown`] rather than failing the run — a stale or renamed
//! provider token must never abort a reconciliation.

use std::fmt;

/// Live availability state of one agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AgentStatus {
    Available,
    Busy,
    Offline,
    Wrapup,
    Unknown,
}

impl AgentStatus {
    /// Translate a provider status token.
    ///
    /// | Token                        | Status      |
    /// |------------------------------|-------------|
    /// | `available`, `online`        | `Available` |
    /// | `on_call`                    | `Busy`      |
    /// | `wrap_up`                    | `Wrapup`    |
    /// | `offline`, `not_available`   | `Offline`   |
    /// | anything else (incl. empty)  | `Unknown`   |
    pub fn from_provider_token(token: &str) -> Self {
        match token {
            "available" | "online" => AgentStatus::Available,
            "on_call" => AgentStatus::Busy,
            "wrap_up" => AgentStatus::Wrapup,
            "offline" | "not_available" => AgentStatus::Offline,
            _ => AgentStatus::Unknown,
        }
    }

    /// The uppercase label published to the dashboard.
    ///
    /// Merged output is sorted descending on this label, so the label set is
    /// part of the ordering contract.
    pub fn label(self) -> &'static str {
        match self {
            AgentStatus::Available => "AVAILABLE",
            AgentStatus::Busy => "BUSY",
            AgentStatus::Offline => "OFFLINE",
            AgentStatus::Wrapup => "WRAPUP",
            AgentStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
