use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("severity {0} is outside 1-4")]
    InvalidSeverity(u8),

    #[error("GOLD grade {0} is outside 1-4")]
    InvalidGrade(u8),
}
