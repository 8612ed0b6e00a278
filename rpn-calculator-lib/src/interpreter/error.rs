use thiserror::Error;

pub type Result<T, E = CalculatorError> = std::result::Result<T, E>;

/// Any failure of the evaluation pipeline.
///
/// Every stage stops at the first problem it finds, so a returned error always
/// describes the leftmost defect in the input. None of these are transient:
/// the only way forward is to fix the expression and submit it again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The input contains text that is neither a numeral, an operator nor a parenthesis.
    #[error("invalid token: {0}")]
    InvalidToken(String),
    /// An opening parenthesis was never closed, or a closing one was never opened.
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    /// The postfix program could not be executed.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

/// The reason a postfix program could not be executed.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("insufficient operands")]
    InsufficientOperands,
    #[error("division by zero")]
    DivisionByZero,
    /// The operand stack did not end with exactly one value.
    #[error("malformed expression")]
    MalformedExpression,
}
