use thiserror::Error;

/// Rejected point-file input. Every variant is reported to the user as the
/// same "incorrectly formatted input" condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("input is not valid UTF-8")]
    Encoding,

    #[error("missing point count on the first line")]
    MissingCount,

    #[error("invalid point count '{line}'")]
    InvalidCount { line: String },

    #[error("at least 2 points are required, got a count of {declared}")]
    TooFewPoints { declared: i64 },

    #[error("declared {declared} points but found {parsed}")]
    CountMismatch { declared: i64, parsed: usize },

    #[error("line {line_no}: expected two coordinates")]
    MissingCoordinate { line_no: usize },

    #[error("line {line_no}: malformed point '{line}'")]
    MalformedLine { line_no: usize, line: String },

    #[error("line {line_no}: coordinates must be finite")]
    NonFiniteCoordinate { line_no: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("coordinate bound must be finite and positive, got {0}")]
    InvalidBound(f64),
}
