use thiserror::Error;

/// Top-level error type for the unistroke recognizer.
#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error(transparent)]
    Stroke(#[from] StrokeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Errors related to raw stroke input.
#[derive(Debug, Error, PartialEq)]
pub enum StrokeError {
    #[error("stroke contains no points")]
    Empty,

    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
}

/// Errors related to recognizer configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("resample count must be at least 2, got {points}")]
    TooFewPoints { points: usize },

    #[error("normalization square must be finite and positive, got {0}")]
    InvalidSquare(f64),

    #[error("threshold {name} = {value} is invalid")]
    InvalidThreshold { name: &'static str, value: f64 },
}

/// Errors related to comparing strokes against templates.
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("point count mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`RecognizerError`].
pub type Result<T> = std::result::Result<T, RecognizerError>;
