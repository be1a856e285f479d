use std::str::FromStr;

use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

use hisaab_core::emi::{self, EmiInput};
use hisaab_core::expression;
use hisaab_core::formatting;
use hisaab_core::percentage::{self, difference, resolver};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Keypad values cross the boundary as strings. Anything unparseable
/// (including "NaN") is `None`.
fn parse_amount(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim()).ok()
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

#[napi]
pub fn evaluate_expression(expression: String) -> String {
    expression::evaluate(&expression).to_string()
}

#[napi]
pub fn resolve_percentage(expression: String, percentage: String) -> String {
    match parse_amount(&percentage) {
        Some(p) => resolver::resolve_percentage_operation(&expression, p).to_string(),
        None => Decimal::ZERO.to_string(),
    }
}

#[napi]
pub fn percentage_of(base: String, percentage: String) -> String {
    match (parse_amount(&base), parse_amount(&percentage)) {
        (Some(b), Some(p)) => percentage::percentage_of(b, p).to_string(),
        _ => Decimal::ZERO.to_string(),
    }
}

// ---------------------------------------------------------------------------
// EMI
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: EmiInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = emi::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Reverse percentage
// ---------------------------------------------------------------------------

#[napi]
pub fn percentage_difference(from_amount: String, to_amount: String) -> String {
    match (parse_amount(&from_amount), parse_amount(&to_amount)) {
        (Some(from), Some(to)) => difference::percentage_difference(from, to).to_string(),
        _ => Decimal::ZERO.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn format_indian_number(value: f64) -> String {
    formatting::format_grouped_f64(value)
}

#[napi]
pub fn number_to_indian_words(value: f64) -> String {
    formatting::number_to_words_f64(value)
}

#[napi]
pub fn format_rupees(value: String) -> String {
    match parse_amount(&value) {
        Some(v) => formatting::format_rupees(v),
        None => formatting::format_rupees(Decimal::ZERO),
    }
}

#[napi]
pub fn format_expression(expression: String) -> String {
    formatting::format_expression_for_display(&expression)
}
