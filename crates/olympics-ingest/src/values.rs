//! Cell parsing helpers.

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a string as i64, returning None for invalid or empty strings.
///
/// Integral decimals such as `1996.0` are accepted.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Some(parsed);
    }
    let float = trimmed.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 {
        Some(float as i64)
    } else {
        None
    }
}

/// Parses a Games year; only positive values that fit in `i32` are valid.
pub fn parse_year(value: &str) -> Option<i32> {
    parse_i64(value)
        .and_then(|year| i32::try_from(year).ok())
        .filter(|year| *year > 0)
}
