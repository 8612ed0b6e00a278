use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use rpn_calculator::interpreter::error::CalculatorError;
use rpn_calculator::interpreter::token::Token;
use rpn_calculator::interpreter::{evaluate_postfix, infix_to_postfix, lexer, tokens_to_string};
use std::io;
use std::io::{BufRead, Write};
use std::process;

/// Evaluates arithmetic expressions by converting them to Reverse Polish Notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Starts an interactive session when left out
    expression: Option<String>,

    /// Read the input as an expression that is already in postfix order
    #[clap(short, long)]
    postfix: bool,

    /// Do not print the postfix form of the expression
    #[clap(long)]
    hide_rpn: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

struct Options {
    postfix_input: bool,
    show_rpn: bool,
}

struct Calculation {
    postfix_tokens: Vec<Token>,
    result: f64,
}

fn main() {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let options = Options {
        postfix_input: args.postfix,
        show_rpn: !args.hide_rpn,
    };
    let stdout = io::stdout();
    let outcome = match &args.expression {
        Some(expression) => run_once(expression, &options, &mut stdout.lock()),
        None => run_session(io::stdin().lock(), &mut stdout.lock(), &options),
    };

    if let Err(error) = outcome {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn calculate(input: &str, options: &Options) -> Result<Calculation, CalculatorError> {
    let postfix_tokens = if options.postfix_input {
        lexer::tokenize(input)
    } else {
        infix_to_postfix(input)?
    };
    let result = evaluate_postfix(&postfix_tokens)?;
    Ok(Calculation {
        postfix_tokens,
        result,
    })
}

fn report(calculation: &Calculation, options: &Options, output: &mut impl Write) -> Result<()> {
    if options.show_rpn {
        writeln!(
            output,
            "RPN: {}",
            tokens_to_string(&calculation.postfix_tokens)?
        )?;
    }
    writeln!(output, "Result: {}", calculation.result)?;
    Ok(())
}

fn run_once(expression: &str, options: &Options, output: &mut impl Write) -> Result<()> {
    debug!("evaluating {:?}", expression);
    let calculation = calculate(expression, options)?;
    report(&calculation, options, output)
}

/// Reads one expression per line until `quit` or the end of the input.
/// A failing expression is reported and the session carries on.
fn run_session(input: impl BufRead, output: &mut impl Write, options: &Options) -> Result<()> {
    info!("starting interactive session");
    writeln!(output, "RPN Calculator. Type 'quit' to exit.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "Enter expression: ")?;
        output.flush().context("Failed to flush prompt")?;

        let line = match lines.next() {
            None => break,
            Some(line) => line.context("Failed to read expression")?,
        };
        let expression = line.trim();
        if expression.eq_ignore_ascii_case("quit") {
            break;
        }
        if expression.is_empty() {
            continue;
        }

        match calculate(expression, options) {
            Ok(calculation) => report(&calculation, options, output)?,
            Err(error) => writeln!(output, "Error: {}", error)?,
        }
    }

    info!("interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INFIX: Options = Options {
        postfix_input: false,
        show_rpn: true,
    };

    fn session_output(input: &str, options: &Options) -> String {
        let mut output = Vec::new();
        run_session(input.as_bytes(), &mut output, options).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn single_expression_prints_rpn_and_result() {
        let mut output = Vec::new();

        run_once("3 + 4 * 2", &INFIX, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "RPN: 3 4 2 * +\nResult: 11\n"
        )
    }

    #[test]
    fn single_failing_expression_is_an_error() {
        let mut output = Vec::new();

        let error = run_once("3 / 0", &INFIX, &mut output).unwrap_err();

        assert_eq!(error.to_string(), "syntax error: division by zero");
        assert!(output.is_empty())
    }

    #[test]
    fn postfix_input_is_evaluated_directly() {
        let options = Options {
            postfix_input: true,
            show_rpn: false,
        };
        let mut output = Vec::new();

        run_once("3 3 +", &options, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Result: 6\n")
    }

    #[test]
    fn session_reports_errors_and_continues_until_quit() {
        let output = session_output("(3 + 4\n\n2.5 * 3\nQUIT\n1 + 1\n", &INFIX);

        assert_eq!(
            output,
            "RPN Calculator. Type 'quit' to exit.\n\
             Enter expression: Error: mismatched parentheses\n\
             Enter expression: \
             Enter expression: RPN: 2.5 3 *\nResult: 7.5\n\
             Enter expression: "
        )
    }

    #[test]
    fn session_ends_at_end_of_input() {
        let output = session_output("  10 / 4  ", &INFIX);

        assert_eq!(
            output,
            "RPN Calculator. Type 'quit' to exit.\n\
             Enter expression: RPN: 10 4 /\nResult: 2.5\n\
             Enter expression: "
        )
    }
}
