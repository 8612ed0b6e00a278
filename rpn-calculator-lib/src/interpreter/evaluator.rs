use crate::interpreter::error::{CalculatorError, Result, SyntaxError};
use crate::interpreter::token::{is_numeral, Token};
use log::trace;

/// Executes the given postfix tokens against an operand stack.
///
/// Numbers are pushed. An operator pops its right operand, then its left
/// operand, and pushes the result. A well-formed program leaves exactly one
/// value behind, which is the result.
///
/// The tokens are not assumed to come from the parser: parentheses and
/// unrecognized text are rejected here as well.
///
/// # Arguments
///
/// * `tokens`: Tokens in postfix order.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::evaluator::evaluate_postfix;
/// use rpn_calculator::interpreter::lexer::tokenize;
///
/// let result = evaluate_postfix(&tokenize("3 4 2 * +"));
/// assert_eq!(result, Ok(11.0));
/// ```
pub fn evaluate_postfix(tokens: &[Token]) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(text) => operands.push(parse_number(text)?),
            Token::Operator(operator) => {
                let (Some(right_operand), Some(left_operand)) = (operands.pop(), operands.pop())
                else {
                    return Err(SyntaxError::InsufficientOperands.into());
                };
                let result = operator.evaluate(left_operand, right_operand)?;
                trace!(
                    "{} {} {} = {}",
                    left_operand,
                    operator,
                    right_operand,
                    result
                );
                operands.push(result);
            }
            Token::LeftParenthesis | Token::RightParenthesis | Token::Unrecognized(_) => {
                return Err(CalculatorError::InvalidToken(token.to_string()))
            }
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        _ => Err(SyntaxError::MalformedExpression.into()),
    }
}

/// The one place numeral text becomes a number.
fn parse_number(text: &str) -> Result<f64> {
    if !is_numeral(text) {
        return Err(CalculatorError::InvalidToken(text.to_string()));
    }
    text.parse::<f64>()
        .map_err(|_| CalculatorError::InvalidToken(text.to_string()))
}
