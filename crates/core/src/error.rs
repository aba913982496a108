use thiserror::Error;

pub type GrowthResult<T> = Result<T, GrowthError>;

#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad projection input, rejected before any computation runs.
    #[error("Invalid projection input: {0}")]
    Validation(String),

    /// Artifact write failure. The in-memory report is still valid.
    #[error("Report persistence error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
