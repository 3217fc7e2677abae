//! Configuration error type.
//!
//! Resolution itself never fails; the only fallible step is turning a
//! [`ControllerConfig`][crate::ControllerConfig] into usable agent settings.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("collision radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("radius buffer must be non-negative and finite, got {0}")]
    NegativeBuffer(f32),

    #[error("minimum movement threshold must be non-negative and finite, got {0}")]
    InvalidThreshold(f32),
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
