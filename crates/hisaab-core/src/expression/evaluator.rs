use rust_decimal::Decimal;

use super::parser::Expr;
use crate::HisaabResult;

/// Evaluate a parsed expression with checked Decimal arithmetic.
pub fn evaluate_expr(expr: &Expr) -> HisaabResult<Decimal> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Negate(inner) => Ok(-evaluate_expr(inner)?),
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            let lhs = evaluate_expr(left)?;
            let rhs = evaluate_expr(right)?;
            operator.apply(lhs, rhs)
        }
    }
}
