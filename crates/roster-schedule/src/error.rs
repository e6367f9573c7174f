use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A source range (time axis or schedule rows) came back with no values.
    #[error("no data found for {what} range")]
    EmptySource { what: String },

    /// The current hour is not one of the parsed axis columns.
    #[error("current hour {hour} not present in the schedule time axis")]
    TimeblockNotFound { hour: u8 },

    /// An agent on the schedule has no entry in the status overlay.
    #[error("no live status for scheduled agent {agent:?}")]
    StatusMissing { agent: String },

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("schedule source transport error: {0}")]
    Transport(#[from] ureq::Error),

    #[error("schedule source response decode error: {0}")]
    Decode(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
