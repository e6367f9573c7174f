//! `roster-schedule` — the schedule reconciliation core.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`axis`]   | hour-label parsing, current-timeblock resolution          |
//! | [`table`]  | `ScheduleTable` (agent → per-timeblock group labels)      |
//! | [`merge`]  | `merge` (group assignment × live status → output records) |
//! | [`source`] | `ScheduleSource` trait, `SheetValuesClient`               |
//! | [`error`]  | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Timeblock model (summary)
//!
//! The sheet carries one row of hour labels (the time axis) and one row per
//! agent whose cells line up with the axis columns:
//!
//! ```text
//! axis      = parse_axis(["9AM", "1PM", "5PM"])   →  [9, 13, 17]
//! timeblock = resolve_current_index(axis, 13)     →  1
//! group     = row cells[1 + timeblock]            →  agent's current group
//! ```
//!
//! Resolution is a hard stop when the current hour is not on the axis —
//! publishing a stale timeblock would silently misreport every agent.

pub mod axis;
pub mod error;
pub mod merge;
pub mod source;
pub mod table;


pub use axis::{parse_axis, resolve_current_index, to_24hour};
pub use error::{ScheduleError, ScheduleResult};
pub use merge::merge;
pub use source::{ScheduleSource, SheetValuesClient};
pub use table::ScheduleTable;
