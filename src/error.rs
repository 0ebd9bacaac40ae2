use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("No input data")]
    EmptyInput,

    #[error("failed reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidShape(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
