use crate::interpreter::error::{Result, SyntaxError};
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
///
/// All operators are left-associative, so operators of equal precedence
/// group from left to right.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    /// Higher binds tighter.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence() >= other.precedence()
    }

    /// Applies the operator to `a` (left-hand side) and `b` (right-hand side).
    ///
    /// Division by exactly zero is reported instead of producing an infinity or NaN.
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide => {
                if b == 0.0 {
                    Err(SyntaxError::DivisionByZero.into())
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
