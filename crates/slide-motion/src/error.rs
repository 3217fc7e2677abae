use slide_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("controller configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{what} length {got} does not match controller count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type MotionResult<T> = Result<T, MotionError>;
