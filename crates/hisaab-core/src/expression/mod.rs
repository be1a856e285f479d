//! Keypad arithmetic: a recursive-descent evaluator for the four basic
//! operators over decimal operands.
//!
//! Expressions arrive mid-entry, so a single dangling operator is dropped
//! before parsing and an empty expression is worth zero.

pub mod evaluator;
pub mod lexer;
pub mod parser;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::HisaabError;
use crate::HisaabResult;

pub use lexer::{Lexer, Token};
pub use parser::{Expr, Parser};

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Recognise both the internal ASCII symbols and the display glyphs.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | '×' | 'x' | 'X' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Display glyph
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Binding strength: multiplication and division bind tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    /// Apply with checked arithmetic.
    pub fn apply(self, lhs: Decimal, rhs: Decimal) -> HisaabResult<Decimal> {
        let result = match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => {
                if rhs.is_zero() {
                    return Err(HisaabError::DivisionByZero {
                        context: format!("{lhs} ÷ {rhs}"),
                    });
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or_else(|| HisaabError::overflow(format!("{lhs} {} {rhs}", self.symbol())))
    }
}

pub fn is_operator(ch: char) -> bool {
    Operator::from_char(ch).is_some()
}

/// Drop one trailing operator (and surrounding whitespace), if present.
pub fn strip_trailing_operator(expression: &str) -> &str {
    let trimmed = expression.trim_end();
    match trimmed.chars().last() {
        Some(ch) if is_operator(ch) => trimmed[..trimmed.len() - ch.len_utf8()].trim_end(),
        _ => trimmed,
    }
}

/// Evaluate an expression, reporting why it could not be evaluated.
pub fn try_evaluate(expression: &str) -> HisaabResult<Decimal> {
    let cleaned = strip_trailing_operator(expression);
    if cleaned.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }

    let ast = Parser::new(Lexer::new(cleaned))?.parse()?;
    Ok(evaluator::evaluate_expr(&ast)?.normalize())
}

/// Evaluate an expression for display. Malformed input evaluates to zero;
/// the failure is logged and callers that need to show "Error" should use
/// [`try_evaluate`].
pub fn evaluate(expression: &str) -> Decimal {
    match try_evaluate(expression) {
        Ok(value) => value,
        Err(e) => {
            warn!(expression, error = %e, "expression evaluation failed");
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_precedence_honoured() {
        assert_eq!(evaluate("2+3×4"), dec!(14));
        assert_eq!(evaluate("2*3+4"), dec!(10));
        assert_eq!(evaluate("20-6÷3"), dec!(18));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("10-4-3"), dec!(3));
        assert_eq!(evaluate("100÷10÷5"), dec!(2));
    }

    #[test]
    fn test_trailing_operator_stripped() {
        assert_eq!(evaluate("10÷2-"), dec!(5));
        assert_eq!(evaluate("7 + "), dec!(7));
        assert_eq!(strip_trailing_operator("5×"), "5");
        assert_eq!(strip_trailing_operator("5"), "5");
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(evaluate(""), Decimal::ZERO);
        assert_eq!(evaluate("   "), Decimal::ZERO);
        assert_eq!(evaluate("+"), Decimal::ZERO);
    }

    #[test]
    fn test_decimals_and_signs() {
        assert_eq!(evaluate("1.5×2"), dec!(3));
        assert_eq!(evaluate("-5+3"), dec!(-2));
        assert_eq!(evaluate("6×-2"), dec!(-12));
        assert_eq!(evaluate(".5+.5"), dec!(1));
        assert_eq!(evaluate("0.1+0.2"), dec!(0.3));
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(evaluate("(2+3)×4"), dec!(20));
        assert_eq!(evaluate("-(1+1)"), dec!(-2));
    }

    #[test]
    fn test_malformed_returns_zero() {
        assert_eq!(evaluate("2++×3"), Decimal::ZERO);
        assert_eq!(evaluate("(2+3"), Decimal::ZERO);
        assert_eq!(evaluate("2+3)"), Decimal::ZERO);
        assert_eq!(evaluate("abc"), Decimal::ZERO);
        assert_eq!(evaluate("1.2.3"), Decimal::ZERO);
    }

    #[test]
    fn test_division_by_zero_is_reported() {
        assert!(matches!(
            try_evaluate("5÷0"),
            Err(HisaabError::DivisionByZero { .. })
        ));
        assert_eq!(evaluate("5÷0"), Decimal::ZERO);
    }

    #[test]
    fn test_operator_glyphs() {
        assert_eq!(Operator::from_char('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('−'), Some(Operator::Subtract));
        assert_eq!(Operator::from_char('7'), None);
        assert_eq!(Operator::Divide.symbol(), '÷');
        assert!(Operator::Multiply.precedence() > Operator::Add.precedence());
    }
}
