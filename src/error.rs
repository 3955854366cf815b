//! Error types for transforms, input parsing and output rendering.

use thiserror::Error;

/// Broad classification of transform failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty sequence or non-finite values
    InvalidInput,
    /// Coefficient count disagrees with the sample count it claims to describe
    LengthMismatch,
}

/// Failure of a forward or inverse transform.
///
/// Validation runs before any output is produced, so a failed call never
/// yields partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("at least one sample is required")]
    EmptyInput,
    #[error("sample[{index}] is not finite")]
    NonFiniteSample { index: usize },
    #[error("coefficient[{index}] is not finite")]
    NonFiniteCoefficient { index: usize },
    #[error("evaluation parameter[{index}] is not finite")]
    NonFiniteParameter { index: usize },
    #[error("coefficient count does not match sample count (expected={expected}, actual={actual})")]
    LengthMismatch { expected: usize, actual: usize },
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::EmptyInput
            | TransformError::NonFiniteSample { .. }
            | TransformError::NonFiniteCoefficient { .. }
            | TransformError::NonFiniteParameter { .. } => ErrorKind::InvalidInput,
            TransformError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
        }
    }
}

/// Failure while parsing text input into samples
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("input contains no samples")]
    Empty,
    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: value is not finite")]
    NonFinite { line: usize },
    #[error("line {line}: expected two coordinates")]
    MalformedPoint { line: usize },
    #[error("decimation step must be at least 1")]
    InvalidStep,
}

/// Failure while writing plots, animation frames or audio
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Wav(#[from] hound::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
