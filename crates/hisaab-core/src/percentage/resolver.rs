use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{try_percentage_of, HUNDRED};
use crate::error::HisaabError;
use crate::expression::{is_operator, try_evaluate, Operator};
use crate::types::Percent;
use crate::HisaabResult;

/// An expression split at its last operator for a percentage-key press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentageContext {
    /// Everything before the trailing operator (empty when there is none).
    pub base_expression: String,
    pub operator: Option<Operator>,
    /// The trailing operand; absent when the expression ends in an operator.
    pub operand: Option<Decimal>,
}

/// Split `expression` into (base, operator, trailing operand).
///
/// The trailing operand is the longest numeric suffix, including a leading
/// minus when that minus opens the expression or follows another operator.
/// An expression with no operator is one bare operand. Returns `None` when
/// nothing numeric can be found.
pub fn split_percentage_context(expression: &str) -> Option<PercentageContext> {
    let chars: Vec<char> = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return None;
    }

    let mut start = chars.len();
    while start > 0 && (chars[start - 1].is_ascii_digit() || chars[start - 1] == '.') {
        start -= 1;
    }
    let digits: String = chars[start..].iter().collect();

    let operand = if digits.is_empty() {
        None
    } else {
        let mut value = parse_operand(&digits)?;
        if start > 0 && Operator::from_char(chars[start - 1]) == Some(Operator::Subtract) {
            let sign_is_unary = start == 1 || {
                let prev = chars[start - 2];
                is_operator(prev) || prev == '('
            };
            if sign_is_unary {
                start -= 1;
                value = -value;
            }
        }
        Some(value)
    };

    let rest = &chars[..start];
    let Some(&last) = rest.last() else {
        return operand.map(|o| PercentageContext {
            base_expression: String::new(),
            operator: None,
            operand: Some(o),
        });
    };

    match Operator::from_char(last) {
        Some(op) => Some(PercentageContext {
            base_expression: rest[..rest.len() - 1].iter().collect(),
            operator: Some(op),
            operand,
        }),
        // No numeric tail and no operator, e.g. "(2+3)": treat the whole
        // expression as the operand.
        None if operand.is_none() => {
            let whole: String = chars.iter().collect();
            try_evaluate(&whole).ok().map(|v| PercentageContext {
                base_expression: String::new(),
                operator: None,
                operand: Some(v),
            })
        }
        None => None,
    }
}

fn parse_operand(digits: &str) -> Option<Decimal> {
    let normalised = match (digits.starts_with('.'), digits.ends_with('.')) {
        (true, _) => format!("0{digits}"),
        (false, true) => digits[..digits.len() - 1].to_string(),
        _ => digits.to_string(),
    };
    Decimal::from_str(&normalised).ok()
}

/// Resolve a percentage-key press against the running expression.
///
/// * bare operand `n`: `n × p / 100`
/// * `base + …`: `base + base × p / 100`
/// * `base - …`: `base − base × p / 100`
/// * `base × …`: `base × p / 100`
/// * `base ÷ …`: `base ÷ (p / 100)`
///
/// `base` is the evaluated value of everything before the trailing operator.
/// If that is empty or malformed the result falls back to `operand × p / 100`.
pub fn try_resolve_percentage_operation(
    expression: &str,
    percentage: Percent,
) -> HisaabResult<Decimal> {
    let ctx = split_percentage_context(expression)
        .ok_or_else(|| HisaabError::malformed(0, "no numeric operand for percentage"))?;
    debug!(?ctx, %percentage, "resolving percentage operation");

    let operand_share = || match ctx.operand {
        Some(operand) => try_percentage_of(operand, percentage),
        None => Err(HisaabError::malformed(
            expression.chars().count(),
            "percentage needs an operand",
        )),
    };

    let Some(operator) = ctx.operator else {
        return operand_share().map(|v| v.normalize());
    };

    let base = match try_evaluate(&ctx.base_expression) {
        Ok(base) if !ctx.base_expression.is_empty() => base,
        _ => return operand_share().map(|v| v.normalize()),
    };

    let result = match operator {
        Operator::Add => Operator::Add.apply(base, try_percentage_of(base, percentage)?)?,
        Operator::Subtract => {
            Operator::Subtract.apply(base, try_percentage_of(base, percentage)?)?
        }
        Operator::Multiply | Operator::Divide => {
            let fraction = percentage
                .checked_div(HUNDRED)
                .ok_or_else(|| HisaabError::overflow("percentage fraction"))?;
            operator.apply(base, fraction)?
        }
    };

    Ok(result.normalize())
}

/// Percentage-key press for display: any failure resolves to zero.
pub fn resolve_percentage_operation(expression: &str, percentage: Percent) -> Decimal {
    match try_resolve_percentage_operation(expression, percentage) {
        Ok(value) => value,
        Err(e) => {
            warn!(expression, %percentage, error = %e, "percentage operation failed");
            Decimal::ZERO
        }
    }
}
