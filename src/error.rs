use thiserror::Error;

#[derive(Error, Debug)]
pub enum NicenessError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("expected {expected} signal value(s), got {got}")]
    SignalMismatch { expected: usize, got: usize },

    #[error("expected {expected} weight(s), got {got}")]
    WeightMismatch { expected: usize, got: usize },

    #[error("expected {expected} rating count(s), got {got}")]
    SourceMismatch { expected: usize, got: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NicenessError>;
