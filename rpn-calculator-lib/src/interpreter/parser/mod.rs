mod infix_converter;
pub mod validator;

use crate::interpreter::error::Result;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use log::debug;

/// Parses the given infix tokens into the equivalent postfix sequence,
/// which can be evaluated left to right with a single operand stack.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same numbers and operators in postfix order, without parentheses.
///
/// # Examples
///
/// ```
/// # use rpn_calculator::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::parser::parse;
/// use rpn_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number("3".to_string()),
///     "+".parse()?,
///     Token::Number("4".to_string()),
/// ];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(postfix_tokens[2], "+".parse()?);
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    validator::validate(&infix_tokens)?;
    validator::check_balance(&infix_tokens)?;
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    debug!("postfix form: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
