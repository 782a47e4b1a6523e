use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpineError {
    /// A control-point index, given directly or derived from a curve
    /// parameter, falls outside `[0, len)`.
    #[error("Index out of range: {index} (control points: {len})")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Non-finite curve parameter: {0}")]
    NonFiniteParameter(f64),

    #[error("Degenerate vector: length {length} is too small to normalize")]
    DegenerateVector { length: f64 },

    #[error("Invalid control points: {0}")]
    InvalidControlPoints(String),

    #[error("Invalid road width: {0}")]
    InvalidWidth(f64),
}

pub type Result<T> = std::result::Result<T, SpineError>;
