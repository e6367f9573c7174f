use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    /// The pre-flight connectivity check failed.  Almost always a bad or
    /// expired API key; the original cause is preserved as the source.
    #[error("dashboard connectivity check failed (invalid API key?)")]
    Connectivity(#[source] ureq::Error),

    #[error("dashboard transport error: {0}")]
    Transport(#[from] ureq::Error),

    #[error("dashboard response decode error: {0}")]
    Decode(#[from] std::io::Error),
}

pub type PublishResult<T> = Result<T, PublishError>;
