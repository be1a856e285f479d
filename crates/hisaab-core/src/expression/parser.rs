//! Recursive descent parser with precedence climbing for the four keypad
//! operators, unary signs and parenthesised groups.

use rust_decimal::Decimal;

use super::lexer::{Lexer, Token};
use super::Operator;
use crate::error::HisaabError;
use crate::HisaabResult;

/// Deepest nesting of parentheses and unary signs accepted.
const MAX_DEPTH: usize = 64;
/// Most binary operators accepted in one expression.
const MAX_OPERATORS: usize = 512;

/// AST node for an arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Decimal),
    Negate(Box<Expr>),
    Binary {
        left: Box<Expr>,
        operator: Operator,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(left: Expr, operator: Operator, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    token_start: usize,
    depth: usize,
    operators: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> HisaabResult<Self> {
        let token_start = lexer.position();
        let current_token = lexer.next_token()?;
        Ok(Self {
            lexer,
            current_token,
            token_start,
            depth: 0,
            operators: 0,
        })
    }

    fn advance(&mut self) -> HisaabResult<()> {
        self.token_start = self.lexer.position();
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn error(&self, reason: impl Into<String>) -> HisaabError {
        HisaabError::malformed(self.token_start, reason)
    }

    fn descend(&mut self) -> HisaabResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.error("expression nested too deeply"));
        }
        Ok(())
    }

    /// Parse the whole input; trailing tokens are an error.
    pub fn parse(mut self) -> HisaabResult<Expr> {
        let expr = self.parse_binary(1)?;
        match self.current_token {
            Token::Eof => Ok(expr),
            Token::RightParen => Err(self.error("unbalanced ')'")),
            ref other => Err(self.error(format!("unexpected {other}"))),
        }
    }

    fn parse_binary(&mut self, min_precedence: u8) -> HisaabResult<Expr> {
        let mut left = self.parse_unary()?;

        while let Token::Operator(op) = self.current_token {
            if op.precedence() < min_precedence {
                break;
            }
            self.operators += 1;
            if self.operators > MAX_OPERATORS {
                return Err(self.error("expression has too many operators"));
            }
            self.advance()?;
            // Left associative: the right side only takes tighter operators.
            let right = self.parse_binary(op.precedence() + 1)?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> HisaabResult<Expr> {
        match self.current_token {
            Token::Operator(Operator::Subtract) => {
                self.descend()?;
                self.advance()?;
                let inner = self.parse_unary()?;
                self.depth -= 1;
                Ok(Expr::Negate(Box::new(inner)))
            }
            Token::Operator(Operator::Add) => {
                self.descend()?;
                self.advance()?;
                let inner = self.parse_unary()?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> HisaabResult<Expr> {
        match self.current_token {
            Token::Number(n) => {
                self.advance()?;
                Ok(Expr::Number(n))
            }
            Token::LeftParen => {
                self.descend()?;
                self.advance()?;
                let inner = self.parse_binary(1)?;
                if self.current_token != Token::RightParen {
                    return Err(self.error("unbalanced '('"));
                }
                self.advance()?;
                self.depth -= 1;
                Ok(inner)
            }
            Token::Operator(op) => Err(self.error(format!(
                "operator '{}' is missing its left operand",
                op.symbol()
            ))),
            Token::RightParen => Err(self.error("unbalanced ')'")),
            Token::Eof => Err(self.error("expected an operand")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(input: &str) -> HisaabResult<Expr> {
        Parser::new(Lexer::new(input))?.parse()
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let expr = parse("2+3×4").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                Expr::Number(dec!(2)),
                Operator::Add,
                Expr::binary(Expr::Number(dec!(3)), Operator::Multiply, Expr::Number(dec!(4))),
            )
        );
    }

    #[test]
    fn test_equal_precedence_is_left_associative() {
        let expr = parse("8-3-2").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                Expr::binary(Expr::Number(dec!(8)), Operator::Subtract, Expr::Number(dec!(3))),
                Operator::Subtract,
                Expr::Number(dec!(2)),
            )
        );
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(
            parse("-4").unwrap(),
            Expr::Negate(Box::new(Expr::Number(dec!(4))))
        );
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert!(matches!(
            parse("(1+2"),
            Err(HisaabError::MalformedExpression { .. })
        ));
        assert!(matches!(
            parse("1+2)"),
            Err(HisaabError::MalformedExpression { .. })
        ));
    }

    #[test]
    fn test_missing_operands() {
        assert!(parse("×3").is_err());
        assert!(parse("3+").is_err());
        assert!(parse("4 5").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let nested = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(parse(&nested).unwrap(), Expr::Number(dec!(1)));

        let too_deep = format!("{}1", "(".repeat(10_000));
        assert!(matches!(
            parse(&too_deep),
            Err(HisaabError::MalformedExpression { ref reason, .. }) if reason.contains("nested")
        ));
        assert!(parse(&format!("{}5", "-".repeat(200_000))).is_err());
    }

    #[test]
    fn test_operator_limit() {
        let long_sum = format!("1{}", "+1".repeat(MAX_OPERATORS + 1));
        assert!(parse(&long_sum).is_err());
        assert!(parse(&format!("1{}", "+1".repeat(MAX_OPERATORS))).is_ok());
    }
}
