//! `roster-status` — the live availability overlay.
//!
//! The schedule sheet keys agents by display name, while the ticketing
//! platform keys status by user id.  This crate owns that indirection:
//!
//! ```text
//! display name ──(directory, role-filtered)──▶ user id ──▶ status token
//! ```
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`provider`] | `StatusProvider` trait, `DirectoryUser`, HTTP client |
//! | [`overlay`]  | `AvailabilityOverlay` (name → id → `AgentStatus`)   |
//! | [`error`]    | `StatusError`, `StatusResult<T>`                    |

pub mod error;
pub mod overlay;
pub mod provider;

#[cfg(test)]
mod tests;

pub use error::{StatusError, StatusResult};
pub use overlay::AvailabilityOverlay;
pub use provider::{DirectoryUser, StatusProvider, TicketingClient};
