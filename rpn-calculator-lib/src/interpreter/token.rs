use crate::interpreter::error::{CalculatorError, Result};
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A decimal numeral, kept in the text form it was written in.
    Number(String),
    Operator(BinaryOperator),
    LeftParenthesis,
    RightParenthesis,
    /// A run of characters that is not part of the grammar.
    Unrecognized(String),
}

pub static SYMBOLS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

impl Token {
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '(' => Some(Token::LeftParenthesis),
            ')' => Some(Token::RightParenthesis),
            symbol => BinaryOperator::from_symbol(symbol).map(Token::Operator),
        }
    }

    /// Classifies a run of non-symbol, non-whitespace characters.
    pub(crate) fn from_word(word: &str) -> Token {
        if is_numeral(word) {
            Token::Number(word.to_string())
        } else {
            Token::Unrecognized(word.to_string())
        }
    }

    /// Whether the token is a numeral, an operator or a parenthesis.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Token::Number(text) => is_numeral(text),
            Token::Operator(_) | Token::LeftParenthesis | Token::RightParenthesis => true,
            Token::Unrecognized(_) => false,
        }
    }
}

/// Whether the text is a decimal numeral: one or more ASCII digits, optionally
/// followed by a `.` and more digits. A trailing `.` is allowed, a leading one is not.
pub fn is_numeral(text: &str) -> bool {
    if !text.starts_with(|character: char| character.is_ascii_digit()) {
        return false;
    }
    let mut digits = 0;
    let mut points = 0;
    for character in text.chars() {
        match character {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
            Token::Unrecognized(text) => write!(f, "{}", text),
        }
    }
}

impl str::FromStr for Token {
    type Err = CalculatorError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        if let (Some(symbol), None) = (characters.next(), characters.next()) {
            if let Some(token) = Token::from_symbol(symbol) {
                return Ok(token);
            }
        }
        match Token::from_word(input) {
            Token::Unrecognized(text) => Err(CalculatorError::InvalidToken(text)),
            token => Ok(token),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
