//! Parsing helpers for raw console input. Values are validated here, at the
//! outermost boundary, so the core can assume well-typed arguments.

/// Parses an integer, `None` when the input is not a valid `i32`.
pub fn parse_int(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

/// Parses a floating-point number, `None` when the input is not a valid
/// `f64`.
pub fn parse_f64(input: &str) -> Option<f64> {
    input.trim().parse().ok()
}

/// Parses a strictly positive floating-point number.
pub fn parse_positive_f64(input: &str) -> Option<f64> {
    parse_f64(input).filter(|value| *value > 0.0)
}

/// Parses an integer and accepts it only inside `[low, high]`.
pub fn parse_int_in_range(input: &str, low: i32, high: i32) -> Option<i32> {
    parse_int(input).filter(|value| (low..=high).contains(value))
}

/// Parses a floating-point number and accepts it only inside `[low, high]`.
pub fn parse_f64_in_range(input: &str, low: f64, high: f64) -> Option<f64> {
    parse_f64(input).filter(|value| *value >= low && *value <= high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_parse_with_surrounding_whitespace() {
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("-500"), Some(-500));
        assert_eq!(parse_int("ten"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn floats_parse_and_reject_garbage() {
        assert_eq!(parse_f64("2.5"), Some(2.5));
        assert_eq!(parse_f64("2,5"), None);
    }

    #[test]
    fn positive_floats_reject_zero_and_below() {
        assert_eq!(parse_positive_f64("3.0"), Some(3.0));
        assert_eq!(parse_positive_f64("0"), None);
        assert_eq!(parse_positive_f64("-1.5"), None);
    }

    #[test]
    fn range_checks_are_inclusive() {
        assert_eq!(parse_int_in_range("100", 0, 100), Some(100));
        assert_eq!(parse_int_in_range("101", 0, 100), None);
        assert_eq!(parse_int_in_range("-1", 0, 100), None);
        assert_eq!(parse_f64_in_range("0.5", 0.5, 24.0), Some(0.5));
        assert_eq!(parse_f64_in_range("25.0", 0.5, 24.0), None);
    }
}
