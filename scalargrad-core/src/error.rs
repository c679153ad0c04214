use thiserror::Error;

/// Custom error type for the scalargrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// An operand the engine cannot differentiate through, e.g. a graph node
    /// passed as the exponent of `pow`.
    #[error("Unsupported operand for {operation}: {reason}")]
    UnsupportedOperand { operation: String, reason: String },

    #[error("Input size mismatch: expected {expected} values, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Length mismatch: {predictions} predictions for {targets} targets")]
    LengthMismatch { predictions: usize, targets: usize },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for ScalarGradError {
    fn from(err: std::io::Error) -> Self {
        ScalarGradError::Io(err.to_string())
    }
}
