//! Text input parsing for 1D value lists and 2D point traces.

use crate::complex::Complex;
use crate::error::InputError;

/// Parse whitespace-separated numbers into real samples (im = 0).
///
/// Line numbers in errors are 1-based.
pub fn parse_values(text: &str) -> Result<Vec<Complex>, InputError> {
    let mut samples = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let line_no = line_idx + 1;
        for token in strip_comment(line).split_whitespace() {
            let value = parse_number(token, line_no)?;
            samples.push(Complex::from_real(value));
        }
    }

    if samples.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(samples)
}

/// Parse one 2D point per non-empty line, as `x y` or `x,y`.
///
/// `#` starts a comment. The result maps x to `re` and y to `im`.
pub fn parse_points(text: &str) -> Result<Vec<Complex>, InputError> {
    let mut points = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let line_no = line_idx + 1;
        let content = strip_comment(line).trim();
        if content.is_empty() {
            continue;
        }

        let coords: Vec<&str> = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        if coords.len() != 2 {
            return Err(InputError::MalformedPoint { line: line_no });
        }

        let x = parse_number(coords[0], line_no)?;
        let y = parse_number(coords[1], line_no)?;
        points.push(Complex::new(x, y));
    }

    if points.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(points)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_number(token: &str, line: usize) -> Result<f64, InputError> {
    let value: f64 = token.parse().map_err(|_| InputError::InvalidNumber {
        line,
        token: token.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NonFinite { line });
    }
    Ok(value)
}
