// File: crates/cylinder-core/src/error.rs
// Summary: Error type for the data-model boundary (values, colors, config, chart kinds).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("series '{series}' has a non-finite value {value} at index {index}")]
    NonFiniteValue { series: String, index: usize, value: f64 },

    #[error("invalid CSS color '{0}'")]
    InvalidColor(String),

    #[error("frame rate must be at least 1 fps")]
    InvalidFps,

    #[error("palette needs at least one color")]
    EmptyPalette,

    #[error("unknown chart kind '{0}' (expected pie, bar or line)")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
