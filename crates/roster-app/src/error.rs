use thiserror::Error;

use roster_core::CoreError;
use roster_publish::PublishError;
use roster_schedule::ScheduleError;
use roster_status::StatusError;

/// Union of the pipeline's stage errors.  Any stage failure aborts the run
/// with no partial publish.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
