use tracing::warn;

use crate::error::FormatError;
use crate::point::Point;

/// Parses a point file: a count line followed by one `x y` line per point.
///
/// `+` signs are dropped before numbers are read, so `1.5e+10` and `+3` are
/// accepted. Only the first two tokens of a point line are read; anything
/// after them is ignored. Trailing blank lines are ignored; any other blank
/// line is malformed.
pub fn parse_points(input: &[u8]) -> Result<Vec<Point>, FormatError> {
    let text = std::str::from_utf8(input).map_err(|_| FormatError::Encoding)?;
    let mut lines = text.trim_end().lines();

    let count_line = lines.next().ok_or(FormatError::MissingCount)?;
    if count_line.trim().is_empty() {
        return Err(FormatError::MissingCount);
    }
    let declared: i64 = count_line.trim().parse().map_err(|_| FormatError::InvalidCount {
        line: count_line.to_string(),
    })?;

    let mut points = Vec::with_capacity(declared.clamp(0, 1 << 20) as usize);
    for (i, line) in lines.enumerate() {
        // line numbers are 1-based and the count sits on line 1
        points.push(parse_point(line, i + 2)?);
    }

    if declared < 2 {
        warn!(declared, "too few points");
        return Err(FormatError::TooFewPoints { declared });
    }
    if points.len() as i64 != declared {
        warn!(declared, parsed = points.len(), "point count mismatch");
        return Err(FormatError::CountMismatch { declared, parsed: points.len() });
    }
    Ok(points)
}

fn parse_point(line: &str, line_no: usize) -> Result<Point, FormatError> {
    let cleaned = line.replace('+', "");
    let mut tokens = cleaned.split_whitespace();
    let malformed = || FormatError::MalformedLine { line_no, line: line.to_string() };
    let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
        return Err(FormatError::MissingCoordinate { line_no });
    };
    let x: f64 = x.parse().map_err(|_| malformed())?;
    let y: f64 = y.parse().map_err(|_| malformed())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(FormatError::NonFiniteCoordinate { line_no });
    }
    Ok(Point::new(x, y))
}
