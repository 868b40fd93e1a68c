//! Formatting and display logic
//!
//! Pure functions for formatting movie data for human-readable display.

use crate::model::types::Axis;

/// Format an integer with comma thousands separators
///
/// # Examples
/// ```
/// use movietui::logic::formatting::format_thousands;
///
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(999), "999");
/// assert_eq!(format_thousands(1000), "1,000");
/// assert_eq!(format_thousands(2_847_246_203), "2,847,246,203");
/// assert_eq!(format_thousands(-1_234_567), "-1,234,567");
/// ```
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format a range-selector value for its display
///
/// Years are shown as-is, gross amounts with thousands separators.
pub fn format_axis_value(axis: Axis, value: i64) -> String {
    match axis {
        Axis::Year => value.to_string(),
        Axis::Gross => format_thousands(value),
    }
}

/// Join a multi-valued field for a table cell
pub fn join_list(values: &[String]) -> String {
    values.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands_boundaries() {
        assert_eq!(format_thousands(1), "1");
        assert_eq!(format_thousands(12), "12");
        assert_eq!(format_thousands(123), "123");
        assert_eq!(format_thousands(1234), "1,234");
        assert_eq!(format_thousands(12345), "12,345");
        assert_eq!(format_thousands(123456), "123,456");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(Axis::Year, 2009), "2009");
        assert_eq!(format_axis_value(Axis::Gross, 2009), "2,009");
    }

    #[test]
    fn test_join_list() {
        assert_eq!(join_list(&[]), "");
        assert_eq!(join_list(&["Joe Russo".to_string()]), "Joe Russo");
        assert_eq!(
            join_list(&["Anthony Russo".to_string(), "Joe Russo".to_string()]),
            "Anthony Russo, Joe Russo"
        );
    }
}
