use hisaab_core::emi::{
    calculate_emi, compute_emi, interest_share, yearly_summary, EmiInput, EmiMethod,
};
use hisaab_core::formatting::format_rupees;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const EPSILON: Decimal = dec!(0.0000001);

// ===========================================================================
// Reducing balance
// ===========================================================================

#[test]
fn test_reference_loan() {
    let r = compute_emi(dec!(100000), dec!(10), 12, EmiMethod::ReducingBalance).unwrap();
    assert!((r.monthly_installment - dec!(8792)).abs() <= dec!(1));
    assert_eq!(format_rupees(r.monthly_installment), "₹8,792");

    let principal_sum: Decimal = r.schedule.iter().map(|m| m.principal_component).sum();
    assert!((principal_sum - dec!(100000)).abs() < EPSILON);

    let last = r.schedule.last().unwrap();
    assert_eq!(last.month, 12);
    assert!(last.remaining_balance.abs() < EPSILON);
}

#[test]
fn test_interest_follows_opening_balance() {
    let r = compute_emi(dec!(500000), dec!(12), 24, EmiMethod::ReducingBalance).unwrap();
    let rate = dec!(12) / dec!(1200);

    let mut opening = dec!(500000);
    for m in &r.schedule {
        assert!((m.interest_component - opening * rate).abs() < EPSILON);
        assert!(m.remaining_balance <= opening);
        opening = m.remaining_balance;
    }
}

#[test]
fn test_totals_consistent_with_schedule() {
    let r = compute_emi(dec!(2500000), dec!(8.5), 240, EmiMethod::ReducingBalance).unwrap();
    assert_eq!(r.total_payment, r.monthly_installment * dec!(240));
    assert_eq!(r.total_interest, r.total_payment - dec!(2500000));

    let interest_sum: Decimal = r.schedule.iter().map(|m| m.interest_component).sum();
    assert!((interest_sum - r.total_interest).abs() < dec!(0.000001));
}

// ===========================================================================
// Flat rate
// ===========================================================================

#[test]
fn test_flat_rate_loan() {
    let r = compute_emi(dec!(300000), dec!(12), 36, EmiMethod::Flat).unwrap();
    // interest = 3,00,000 × 12% × 3 years
    assert!((r.total_interest - dec!(108000)).abs() < EPSILON);
    for m in &r.schedule[..35] {
        assert_eq!(m.principal_component, dec!(300000) / dec!(36));
        assert_eq!(m.interest_component, dec!(3000));
    }
    assert_eq!(r.schedule[35].remaining_balance, Decimal::ZERO);
}

// ===========================================================================
// Envelope and supplements
// ===========================================================================

#[test]
fn test_envelope_from_json() {
    let input: EmiInput = serde_json::from_str(
        r#"{"principal": "100000", "annual_rate_percent": "10", "tenure_months": 12, "method": "Flat"}"#,
    )
    .unwrap();
    let out = calculate_emi(&input).unwrap();
    assert!(out.methodology.starts_with("Flat-rate"));
    assert_eq!(out.assumptions["tenure_months"], 12);
    assert_eq!(out.result.schedule.len(), 12);
}

#[test]
fn test_yearly_rollup_matches_schedule() {
    let r = compute_emi(dec!(1000000), dec!(9), 60, EmiMethod::ReducingBalance).unwrap();
    let years = yearly_summary(&r.schedule);
    assert_eq!(years.len(), 5);

    let principal: Decimal = years.iter().map(|y| y.principal_paid).sum();
    assert!((principal - dec!(1000000)).abs() < EPSILON);
    assert!(years[4].closing_balance.abs() < EPSILON);
}

#[test]
fn test_interest_share_between_zero_and_hundred() {
    let r = compute_emi(dec!(100000), dec!(10), 12, EmiMethod::ReducingBalance).unwrap();
    let share = interest_share(&r);
    assert!(share > Decimal::ZERO && share < dec!(100));
}

#[test]
fn test_invalid_inputs_return_none() {
    assert!(compute_emi(dec!(100000), Decimal::ZERO, 12, EmiMethod::ReducingBalance).is_none());
    assert!(compute_emi(dec!(-1), dec!(10), 12, EmiMethod::Flat).is_none());
    assert!(compute_emi(dec!(100000), dec!(10), 0, EmiMethod::ReducingBalance).is_none());
}

#[test]
fn test_absurd_tenure_returns_none() {
    assert!(compute_emi(dec!(100000), dec!(10), u32::MAX, EmiMethod::Flat).is_none());
    assert!(compute_emi(dec!(100000), dec!(10), 1201, EmiMethod::ReducingBalance).is_none());
}
