use hisaab_core::formatting::{
    format_expression_for_display, format_grouped_digits, format_grouped_f64, format_rupees,
    number_to_words, number_to_words_f64, parse_grouped_digits,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Indian digit grouping
// ===========================================================================

#[test]
fn test_grouping_reference_values() {
    assert_eq!(format_grouped_digits(dec!(1234567)), "12,34,567");
    assert_eq!(format_grouped_digits(dec!(100)), "100");
    assert_eq!(format_grouped_digits(dec!(-5000)), "-5,000");
}

#[test]
fn test_grouping_lakh_and_crore_boundaries() {
    assert_eq!(format_grouped_digits(dec!(99999)), "99,999");
    assert_eq!(format_grouped_digits(dec!(100000)), "1,00,000");
    assert_eq!(format_grouped_digits(dec!(9999999)), "99,99,999");
    assert_eq!(format_grouped_digits(dec!(10000000)), "1,00,00,000");
}

#[test]
fn test_grouping_round_trips_through_parse() {
    let values = [
        dec!(0),
        dec!(7),
        dec!(1000),
        dec!(123456789),
        dec!(-98765432.10),
        dec!(999999999999999),
    ];
    for v in values {
        let shown = format_grouped_digits(v);
        assert_eq!(parse_grouped_digits(&shown), Some(v), "round trip of {shown}");
    }
}

#[test]
fn test_rupee_display_round_trips_within_a_rupee() {
    let emi = dec!(8791.588723);
    let shown = format_rupees(emi);
    assert_eq!(shown, "₹8,792");
    let back = parse_grouped_digits(&shown).unwrap();
    assert!((back - emi).abs() <= dec!(0.5));
}

#[test]
fn test_non_finite_inputs_degrade_safely() {
    assert_eq!(format_grouped_f64(f64::NAN), "0");
    assert_eq!(format_grouped_f64(f64::NEG_INFINITY), "0");
    assert_eq!(number_to_words_f64(f64::INFINITY), "Zero");
}

// ===========================================================================
// Words on the Indian scale
// ===========================================================================

#[test]
fn test_words_reference_values() {
    assert_eq!(number_to_words(dec!(100000)), "One Lakh");
    assert_eq!(number_to_words(dec!(10000000)), "One Crore");
    assert_eq!(number_to_words(Decimal::ZERO), "Zero");
    assert_eq!(
        number_to_words(dec!(1234)),
        "One Thousand Two Hundred Thirty Four"
    );
}

#[test]
fn test_words_follow_grouping() {
    // 12,34,56,789 reads group by group
    let n = dec!(123456789);
    assert_eq!(format_grouped_digits(n), "12,34,56,789");
    assert_eq!(
        number_to_words(n),
        "Twelve Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred Eighty Nine"
    );
}

#[test]
fn test_words_large_magnitudes() {
    // 99,99,99,99,99,99,999 is just under 10^15
    assert_eq!(
        number_to_words(dec!(999999999999999)),
        "Ninety Nine Neel Ninety Nine Kharab Ninety Nine Arab Ninety Nine Crore \
         Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine"
    );
    assert_eq!(number_to_words(dec!(1000000000000000)), "One Padma");
}

#[test]
fn test_words_negative() {
    assert_eq!(number_to_words(dec!(-250000)), "Negative Two Lakh Fifty Thousand");
}

// ===========================================================================
// Expression display
// ===========================================================================

#[test]
fn test_expression_display() {
    assert_eq!(format_expression_for_display("1000*12/100"), "1000 × 12 ÷ 100");
    assert_eq!(format_expression_for_display("5 ×   -3"), "5 × -3");
}
