use tracing::debug;

use crate::closest_pair::closest_pair;
use crate::error::FormatError;
use crate::input::parse_points;
use crate::output::{format_distance, DEFAULT_SIGNIFICANT_DIGITS};

pub const FORMAT_ERROR_MESSAGE: &str = "Incorrectly formatted input";

/// Process exit status used when the input is rejected.
///
/// `Success` keeps the historical behaviour of printing the diagnostic and
/// exiting 0; `Failure` exits 1 so scripts can detect bad input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExitPolicy {
    #[default]
    Success,
    Failure,
}

impl ExitPolicy {
    pub fn code(self) -> u8 {
        match self {
            ExitPolicy::Success => 0,
            ExitPolicy::Failure => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub significant_digits: usize,
    pub format_error_exit: ExitPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            format_error_exit: ExitPolicy::default(),
        }
    }
}

/// Parses a point file, solves it and returns the formatted distance line
/// (without the trailing newline).
pub fn solve_input(input: &[u8], config: &Config) -> Result<String, FormatError> {
    let points = parse_points(input)?;
    debug!(num_points = points.len(), "parsed input");
    let d = closest_pair(&points);
    Ok(format_distance(d, config.significant_digits))
}

/// Text printed to stdout for rejected input.
pub fn format_error_report() -> String {
    format!("{FORMAT_ERROR_MESSAGE}\n")
}
