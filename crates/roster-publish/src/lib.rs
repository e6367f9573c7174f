//! `roster-publish` — the dataset publish collaborator.
//!
//! Publishing is a full-dataset replace, never an incremental patch, so a
//! re-run with identical inputs converges the dashboard to identical state.
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`schema`]    | `SchemaField`, `FieldType`, `roster_schema()`     |
//! | [`publisher`] | `DatasetPublisher` trait                          |
//! | [`dashboard`] | `DashboardClient` (HTTP, basic-auth API key)      |
//! | [`error`]     | `PublishError`, `PublishResult<T>`                |

pub mod dashboard;
pub mod error;
pub mod publisher;
pub mod schema;

#[cfg(test)]
mod tests;

pub use dashboard::DashboardClient;
pub use error::{PublishError, PublishResult};
pub use publisher::DatasetPublisher;
pub use schema::{FieldType, SchemaDescriptor, SchemaField, roster_schema};
