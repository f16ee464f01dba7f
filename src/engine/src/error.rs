use thiserror::Error;

use crate::session::Phase;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("`{operation}` is not allowed while the session is {phase:?}")]
    WrongPhase {
        operation: &'static str,
        phase: Phase,
    },
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to parse engine configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Failed to read engine configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
