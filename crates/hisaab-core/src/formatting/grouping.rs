use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{money_from_f64, Money};

const SEPARATOR: char = ',';
const RUPEE: char = '₹';

/// Group the integer part Indian style: the last three digits form one group
/// and every group to the left of it is two digits (12,34,567). A fractional
/// part is carried through as-is.
pub fn format_grouped_digits(value: Decimal) -> String {
    let negative = value.is_sign_negative() && !value.is_zero();
    let magnitude = value.abs().to_string();
    let (integer, fraction) = match magnitude.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (magnitude.as_str(), None),
    };

    let mut out = String::with_capacity(magnitude.len() + magnitude.len() / 2 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_integer_digits(integer));
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Float entry point. NaN and infinities render as "0".
pub fn format_grouped_f64(value: f64) -> String {
    match money_from_f64(value) {
        Some(v) => format_grouped_digits(v),
        None => "0".to_string(),
    }
}

/// Whole-rupee display, e.g. `₹8,792`. Rounds half away from zero.
pub fn format_rupees(value: Money) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let grouped = format_grouped_digits(rounded.abs());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{RUPEE}{grouped}")
    } else {
        format!("{RUPEE}{grouped}")
    }
}

/// Inverse of [`format_grouped_digits`] (and of [`format_rupees`]). Returns
/// `None` for anything that is not a grouped decimal number.
pub fn parse_grouped_digits(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let body = body.strip_prefix(RUPEE).unwrap_or(body);
    let digits: String = body
        .chars()
        .filter(|c| *c != SEPARATOR && !c.is_whitespace())
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let value = Decimal::from_str(&digits).ok()?;
    Some(if negative { -value } else { value })
}

fn group_integer_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 1);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let separator = SEPARATOR.to_string();
    let mut out = groups.join(separator.as_str());
    out.push(SEPARATOR);
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouping_known_answers() {
        assert_eq!(format_grouped_digits(dec!(1234567)), "12,34,567");
        assert_eq!(format_grouped_digits(dec!(100)), "100");
        assert_eq!(format_grouped_digits(dec!(-5000)), "-5,000");
        assert_eq!(format_grouped_digits(dec!(100000)), "1,00,000");
        assert_eq!(format_grouped_digits(dec!(12345678901)), "12,34,56,78,901");
    }

    #[test]
    fn test_grouping_keeps_fraction() {
        assert_eq!(format_grouped_digits(dec!(1234567.891)), "12,34,567.891");
        assert_eq!(format_grouped_digits(dec!(-0.5)), "-0.5");
    }

    #[test]
    fn test_grouping_zero_has_no_sign() {
        assert_eq!(format_grouped_digits(Decimal::ZERO), "0");
        assert_eq!(format_grouped_digits(-Decimal::ZERO), "0");
    }

    #[test]
    fn test_grouping_non_finite_floats() {
        assert_eq!(format_grouped_f64(f64::NAN), "0");
        assert_eq!(format_grouped_f64(f64::INFINITY), "0");
        assert_eq!(format_grouped_f64(2500000.0), "25,00,000");
    }

    #[test]
    fn test_rupees_rounds_to_whole_units() {
        assert_eq!(format_rupees(dec!(8791.59)), "₹8,792");
        assert_eq!(format_rupees(dec!(105499.08)), "₹1,05,499");
        assert_eq!(format_rupees(dec!(-1500.5)), "-₹1,501");
    }

    #[test]
    fn test_parse_round_trip() {
        for v in [dec!(0), dec!(999), dec!(1234567), dec!(-5000), dec!(98765.4321)] {
            assert_eq!(parse_grouped_digits(&format_grouped_digits(v)), Some(v));
        }
        assert_eq!(parse_grouped_digits("₹8,792"), Some(dec!(8792)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_grouped_digits(""), None);
        assert_eq!(parse_grouped_digits("12,3a"), None);
        assert_eq!(parse_grouped_digits("1.2.3"), None);
    }
}
