use crate::interpreter::token::{Token, SYMBOLS};
use log::trace;

/// Splits the given expression into tokens.
///
/// Whitespace only separates tokens. Each of the symbols `+ - * / ( )` is a token
/// of its own, and any other run of characters is kept together as one word, so
/// `4a` stays a single (unrecognized) token rather than `4` followed by `a`.
/// Scanning never fails; words that are not numerals are left for validation
/// to reject.
///
/// # Arguments
///
/// * `expression`: The text to split. Works for infix and postfix text alike.
///
/// returns: The tokens, in the order they appear in the text.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("(3 + 4.5)*2");
/// assert_eq!(tokens.len(), 7);
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut characters = expression.char_indices().peekable();

    while let Some((start, character)) = characters.next() {
        if character.is_whitespace() {
            continue;
        }
        if let Some(token) = Token::from_symbol(character) {
            tokens.push(token);
            continue;
        }

        let mut end = start + character.len_utf8();
        while let Some((index, next)) = characters.next_if(|(_, next)| !is_delimiter(*next)) {
            end = index + next.len_utf8();
        }
        tokens.push(Token::from_word(&expression[start..end]));
    }

    trace!("tokenized {:?} into {:?}", expression, tokens);
    tokens
}

fn is_delimiter(character: char) -> bool {
    character.is_whitespace() || SYMBOLS.contains(&character)
}
