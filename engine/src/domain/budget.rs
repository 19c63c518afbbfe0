//! Derived trip budget.
//!
//! The total over the itemized inputs and both transport legs is recomputed
//! synchronously after every change to one of its inputs, so the value is
//! settled before any save snapshot reads it.

use super::transport;

/// Coerce raw user input to an integer amount. Non-numeric input counts
/// as 0.
pub fn parse_amount(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Total of the itemized budget inputs plus the parsed cost of both
/// transport legs.
pub fn total(
    accommodation: i64,
    food: i64,
    other: i64,
    go_leg: Option<&str>,
    return_leg: Option<&str>,
) -> i64 {
    accommodation
        + food
        + other
        + transport::parse_cost(go_leg)
        + transport::parse_cost(return_leg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_without_legs() {
        assert_eq!(total(1000, 2000, 500, None, None), 3500);
    }

    #[test]
    fn test_total_with_legs() {
        let go = "KTX | 서울역 → 부산역 | 0630 → 0930 | 59800원";
        let back = "KTX | 부산역 → 서울역 | 1800 → 2100 | 59800원";

        assert_eq!(total(10000, 0, 0, Some(go), Some(back)), 129600);
    }

    #[test]
    fn test_non_numeric_input_counts_as_zero() {
        assert_eq!(parse_amount("abc"), 0);
        assert_eq!(total(parse_amount("abc"), 0, 0, None, None), 0);
    }

    #[test]
    fn test_parse_amount_trims_whitespace() {
        assert_eq!(parse_amount(" 42000 "), 42000);
    }
}
