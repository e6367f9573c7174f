//! `roster-core` — foundational types for the rosterboard reconciler.
//!
//! This crate is a dependency of every other `roster-*` crate.  It has no
//! `roster-*` dependencies and minimal external ones (`thiserror`, `serde`,
//! `chrono`).
//!
//! # What lives here
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`status`] | `AgentStatus` enum + provider-token translation  |
//! | [`record`] | `OutputRecord` (the published row shape)         |
//! | [`time`]   | `ReportingClock` (fixed-UTC-offset wall clock)   |
//! | [`config`] | `RosterConfig` (injected, never ambient)         |
//! | [`error`]  | `CoreError`, `CoreResult<T>`                     |

pub mod config;
pub mod error;
pub mod record;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RosterConfig;
pub use error::{CoreError, CoreResult};
pub use record::{GROUP_FALLBACK, OutputRecord};
pub use status::AgentStatus;
pub use time::ReportingClock;
