use crate::interpreter::error::{CalculatorError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::debug;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
///
/// The output only holds numbers and operators. Parentheses are checked again
/// here even though `check_balance` normally runs first, since nothing stops a
/// caller from handing in an unchecked sequence.
pub(crate) fn infix_to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParenthesis => operators.push(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)
            }
            Token::RightParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            Token::Unrecognized(text) => return Err(CalculatorError::InvalidToken(text)),
        };
    }

    transfer_leftover_operators(operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(mut operators: Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::LeftParenthesis | Token::RightParenthesis => {
                debug!("unclosed parenthesis left on the operator stack");
                return Err(CalculatorError::MismatchedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => {
                debug!("closing parenthesis without an opening one");
                return Err(CalculatorError::MismatchedParentheses);
            }
            // Discard the open parenthesis.
            Some(Token::LeftParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    // Equal precedence pops too, which makes every operator left-associative.
    while let Some(&Token::Operator(other_operator)) = operators.last() {
        if !other_operator.precedence_ge(&operator) {
            break;
        }
        operators.pop();
        output.push(Token::Operator(other_operator));
    }

    operators.push(Token::Operator(operator));
}
