pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::Result;
use crate::interpreter::token::Token;
use anyhow::Context;
use log::debug;
use string_builder::Builder;

/// Evaluates the given infix expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, using `+ - * /`, parentheses
///   and non-negative decimal numerals.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::evaluate;
///
/// let result = evaluate("(3 + 4) * 2");
/// assert_eq!(result, Ok(14.0));
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    let postfix_tokens = infix_to_postfix(expression)?;
    evaluate_postfix(&postfix_tokens)
}

/// Converts the given infix expression into tokens in postfix order.
///
/// Checks that every token is valid and that parentheses are balanced,
/// but not that operators have enough operands; that only shows up once the
/// postfix tokens are evaluated.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent postfix tokens.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::{infix_to_postfix, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = infix_to_postfix("3 + 4 * 2")?;
/// assert_eq!(tokens_to_string(&postfix_tokens)?, "3 4 2 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn infix_to_postfix(expression: &str) -> Result<Vec<Token>> {
    let tokens = lexer::tokenize(expression);
    parser::parse(tokens)
        .inspect_err(|error| debug!("could not convert {:?}: {}", expression, error))
}

/// Evaluates tokens that are already in postfix order.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::{evaluate_postfix, infix_to_postfix};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = infix_to_postfix("10 / 4")?;
/// assert_eq!(evaluate_postfix(&postfix_tokens)?, 2.5);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix(tokens: &[Token]) -> Result<f64> {
    evaluator::evaluate_postfix(tokens)
        .inspect_err(|error| debug!("could not evaluate {:?}: {}", tokens, error))
}

/// Prints the given tokens in their original text form, separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::tokens_to_string;
/// use rpn_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Number("2.5".to_string()),
///     Token::Number("4".to_string()),
///     "*".parse()?,
/// ];
/// let printed_tokens = tokens_to_string(&tokens)?;
/// print!("{}", printed_tokens);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> anyhow::Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
