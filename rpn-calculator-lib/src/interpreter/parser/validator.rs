use crate::interpreter::error::{CalculatorError, Result};
use crate::interpreter::token::Token;

/// Checks that every token is a numeral, an operator or a parenthesis.
///
/// Says nothing about whether the tokens form a meaningful expression.
///
/// returns: An `InvalidToken` error naming the first offending token, if any.
pub fn validate(tokens: &[Token]) -> Result<()> {
    match tokens.iter().find(|token| !token.is_well_formed()) {
        None => Ok(()),
        Some(token) => Err(CalculatorError::InvalidToken(token.to_string())),
    }
}

/// Checks that every closing parenthesis has an opening one before it,
/// and that every opening parenthesis gets closed.
pub fn check_balance(tokens: &[Token]) -> Result<()> {
    let mut depth: usize = 0;
    for token in tokens {
        match token {
            Token::LeftParenthesis => depth += 1,
            Token::RightParenthesis => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(CalculatorError::MismatchedParentheses)?;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(CalculatorError::MismatchedParentheses);
    }
    Ok(())
}
