use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    /// A scheduled agent has no matching entry in the directory.
    #[error("scheduled agent {agent:?} not found in the provider directory")]
    AgentLookup { agent: String },

    #[error("status provider transport error: {0}")]
    Transport(#[from] ureq::Error),

    #[error("status provider response decode error: {0}")]
    Decode(#[from] std::io::Error),
}

pub type StatusResult<T> = Result<T, StatusError>;
