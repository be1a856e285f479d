//! Tokenizer for keypad expressions

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::Operator;
use crate::error::HisaabError;
use crate::HisaabResult;

/// Token types recognized by the lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Decimal),
    Operator(Operator),
    LeftParen,
    RightParen,
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Eof => write!(f, "end of expression"),
        }
    }
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            input: chars,
            position: 0,
            current_char,
        }
    }

    /// Character offset of the next unread character
    pub fn position(&self) -> usize {
        self.position
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> HisaabResult<Token> {
        let start = self.position;
        let mut number = String::new();
        let mut seen_point = false;

        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' {
                if seen_point {
                    return Err(HisaabError::malformed(
                        self.position,
                        "second decimal point in operand",
                    ));
                }
                seen_point = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if number == "." {
            return Err(HisaabError::malformed(start, "decimal point without digits"));
        }

        // "12." and ".5" are valid keypad states
        let normalised = match (number.starts_with('.'), number.ends_with('.')) {
            (true, _) => format!("0{number}"),
            (false, true) => number[..number.len() - 1].to_string(),
            _ => number,
        };

        Decimal::from_str(&normalised)
            .map(Token::Number)
            .map_err(|e| HisaabError::malformed(start, format!("invalid number '{normalised}': {e}")))
    }

    pub fn next_token(&mut self) -> HisaabResult<Token> {
        self.skip_whitespace();

        match self.current_char {
            None => Ok(Token::Eof),
            Some(ch) => match ch {
                '0'..='9' | '.' => self.read_number(),
                '(' => {
                    self.advance();
                    Ok(Token::LeftParen)
                }
                ')' => {
                    self.advance();
                    Ok(Token::RightParen)
                }
                _ => match Operator::from_char(ch) {
                    Some(op) => {
                        self.advance();
                        Ok(Token::Operator(op))
                    }
                    None => Err(HisaabError::malformed(
                        self.position,
                        format!("unexpected character '{ch}'"),
                    )),
                },
            },
        }
    }
}
