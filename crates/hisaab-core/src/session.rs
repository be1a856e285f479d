//! Keypad session for the basic calculator screen.
//!
//! The session owns the running expression, what the display shows and the
//! in-memory calculation history. All arithmetic is delegated to the
//! stateless [`expression`](crate::expression) and
//! [`percentage`](crate::percentage) modules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HisaabError;
use crate::expression::{self, Operator};
use crate::formatting::format_expression_for_display;
use crate::percentage::percentage_of;
use crate::percentage::resolver::{resolve_percentage_operation, split_percentage_context};
use crate::HisaabResult;

const ERROR_DISPLAY: &str = "Error";

/// A completed calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: Decimal,
}

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    expression: String,
    display: String,
    history: Vec<HistoryEntry>,
    /// The expression holds a result; the next digit starts a new calculation.
    just_evaluated: bool,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self {
            expression: String::new(),
            display: "0".to_string(),
            history: Vec::new(),
            just_evaluated: false,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Live value of the expression as typed so far.
    pub fn preview(&self) -> Decimal {
        expression::evaluate(&self.expression)
    }

    pub fn press_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        self.start_fresh_if_evaluated();

        if self.trailing_operand() == "0" {
            self.expression.pop();
        }
        self.expression.push(digit);
        self.refresh_display();
    }

    pub fn press_decimal_point(&mut self) {
        self.start_fresh_if_evaluated();

        let operand = self.trailing_operand();
        if operand.contains('.') {
            return;
        }
        if operand.is_empty() {
            self.expression.push('0');
        }
        self.expression.push('.');
        self.refresh_display();
    }

    /// Append an operator. A trailing operator is replaced, except that a
    /// minus after × or ÷ starts a negative operand. A leading minus starts a
    /// negative first operand.
    pub fn press_operator(&mut self, op: Operator) {
        self.just_evaluated = false;

        match self.expression.chars().last() {
            None => {
                if op == Operator::Subtract {
                    self.expression.push(op.symbol());
                }
            }
            Some(last) => match Operator::from_char(last) {
                Some(Operator::Multiply | Operator::Divide) if op == Operator::Subtract => {
                    self.expression.push(op.symbol());
                }
                Some(_) if self.expression.chars().count() == 1 => {}
                Some(_) => {
                    self.pop_trailing_operators();
                    self.expression.push(op.symbol());
                }
                None => self.expression.push(op.symbol()),
            },
        }
        self.refresh_display();
    }

    /// The trailing operand is the percentage, applied to the rest of the
    /// expression: `1000+10%` gives 1100, a bare `50%` gives 0.5. Returns the
    /// result, or `None` when there is no operand to take a percentage of.
    pub fn press_percent(&mut self) -> Option<Decimal> {
        let ctx = split_percentage_context(&self.expression)?;
        let percentage = ctx.operand?;

        let result = match ctx.operator {
            None => percentage_of(percentage, Decimal::ONE),
            Some(op) => {
                let pending = format!("{}{}", ctx.base_expression, op.symbol());
                resolve_percentage_operation(&pending, percentage)
            }
        };
        let result = canonical(result);

        let shown = format!("{}%", format_expression_for_display(&self.expression));
        self.record(shown, result);
        Some(result)
    }

    /// Evaluate the expression, record it in the history and carry the
    /// result forward. A malformed expression shows "Error" and resets.
    pub fn press_equals(&mut self) -> Option<Decimal> {
        if self.expression.is_empty() {
            return None;
        }

        match expression::try_evaluate(&self.expression) {
            Ok(value) => {
                let value = canonical(value);
                let shown = format_expression_for_display(&self.expression);
                self.record(shown, value);
                Some(value)
            }
            Err(_) => {
                self.expression.clear();
                self.display = ERROR_DISPLAY.to_string();
                self.just_evaluated = false;
                None
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.just_evaluated {
            self.clear();
            return;
        }
        self.expression.pop();
        self.refresh_display();
    }

    /// Clear the running expression; history is kept.
    pub fn clear(&mut self) {
        self.expression.clear();
        self.just_evaluated = false;
        self.refresh_display();
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Drive the session from a key string. Digits, `.`, the operator glyphs,
    /// `%`, `=`, `C` (clear) and `<` (backspace) are understood; whitespace is
    /// ignored.
    pub fn apply_keys(&mut self, keys: &str) -> HisaabResult<()> {
        for key in keys.chars() {
            match key {
                '0'..='9' => self.press_digit(key),
                '.' => self.press_decimal_point(),
                '%' => {
                    self.press_percent();
                }
                '=' => {
                    self.press_equals();
                }
                'C' | 'c' => self.clear(),
                '<' => self.backspace(),
                k if k.is_whitespace() => {}
                k => match Operator::from_char(k) {
                    Some(op) => self.press_operator(op),
                    None => {
                        return Err(HisaabError::InvalidInput {
                            field: "keys".into(),
                            reason: format!("unknown key '{k}'"),
                        })
                    }
                },
            }
        }
        Ok(())
    }

    fn record(&mut self, shown: String, result: Decimal) {
        self.history.push(HistoryEntry {
            expression: shown,
            result,
        });
        self.expression = result.to_string();
        self.just_evaluated = true;
        self.refresh_display();
    }

    fn start_fresh_if_evaluated(&mut self) {
        if self.just_evaluated {
            self.expression.clear();
            self.just_evaluated = false;
        }
    }

    /// The numeric tail of the expression (digits and decimal point).
    fn trailing_operand(&self) -> &str {
        let start = self
            .expression
            .rfind(|c: char| !(c.is_ascii_digit() || c == '.'))
            .map(|i| i + self.expression[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        &self.expression[start..]
    }

    fn pop_trailing_operators(&mut self) {
        while let Some(last) = self.expression.chars().last() {
            if Operator::from_char(last).is_none() || self.expression.chars().count() == 1 {
                break;
            }
            self.expression.pop();
        }
    }

    fn refresh_display(&mut self) {
        self.display = if self.expression.is_empty() {
            "0".to_string()
        } else {
            format_expression_for_display(&self.expression)
        };
    }
}

/// Normalise trailing zeros and negative zero for display.
fn canonical(value: Decimal) -> Decimal {
    if value.is_zero() {
        Decimal::ZERO
    } else {
        value.normalize()
    }
}
