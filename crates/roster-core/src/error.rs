//! Shared error base.
//!
//! Sub-crates define their own error enums (schedule, status, publish) and
//! wrap `CoreError` as one variant where they need it.  Pipeline-stage
//! errors live with the stage that raises them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `roster-core`.
pub type CoreResult<T> = Result<T, CoreError>;
