//! The `DatasetPublisher` trait implemented by the dashboard client.

use roster_core::OutputRecord;

use crate::schema::SchemaDescriptor;
use crate::PublishResult;

/// Write access to the dashboard's datasets API.
///
/// Tests substitute an in-memory fake; production uses
/// [`DashboardClient`][crate::DashboardClient].
pub trait DatasetPublisher {
    /// Pre-flight connectivity/credential check.  Must pass before any
    /// other call is attempted.
    fn ping(&self) -> PublishResult<()>;

    /// Ensure the named dataset exists with the given schema.
    /// Idempotent — safe to call on every run.
    fn find_or_create(&self, name: &str, schema: &SchemaDescriptor) -> PublishResult<()>;

    /// Replace the full contents of the dataset with `records`.
    fn replace(&self, name: &str, records: &[OutputRecord]) -> PublishResult<()>;

    /// Delete the dataset entirely.
    fn delete(&self, name: &str) -> PublishResult<()>;
}
