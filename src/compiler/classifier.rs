use crate::{
    ast::{Literal, ParseRow},
    compiler::lexer::{LexedStatement, Token, tokenize_statement},
    error::ParseError,
};

/// Classifies a single statement into a parse-table row.
///
/// A statement may be one of:
/// - a bare declaration: `var <identifier>`.
/// - a declaration with assignment: `var <identifier> = <integer>`.
/// - a literal display: `disp(<integer>)` or `disp("<text>")`.
/// - a variable display: `disp(<identifier>)`.
///
/// Matching is attempted in that order, declaration/assignment before
/// display. The statement's token sequence must match one form in full;
/// there is no recursive grammar behind these shapes.
///
/// A declaration whose right-hand side is not a valid integer literal is a
/// type error. A statement matching no form at all is a syntax error. Both
/// are reported with the statement's 1-based index and only skip the
/// statement itself.
///
/// # Parameters
/// - `statement`: One trimmed statement, as produced by the splitter.
/// - `index`: The statement's 1-based position in the program.
///
/// # Returns
/// The classified [`ParseRow`].
///
/// # Errors
/// Returns a `ParseError` if:
/// - the assignment value is malformed (`ParseError::TypeError`),
/// - the statement form is unrecognized (`ParseError::InvalidSyntax`).
///
/// ## Example
/// ```
/// use myc::{ast::ParseRow, compiler::classifier::classify_statement};
///
/// let row = classify_statement("var x=5", 1).unwrap();
///
/// assert_eq!(row,
///            ParseRow::Declaration { name:  "x".to_string(),
///                                    value: Some(5), });
/// ```
pub fn classify_statement(statement: &str, index: usize) -> Result<ParseRow, ParseError> {
    let LexedStatement { tokens, first_error } = tokenize_statement(statement);

    if let Some(position) = first_error {
        // Garbage after `var <identifier> =` is a malformed value; garbage
        // anywhere else makes the whole statement unrecognizable.
        if position >= 3 && is_assignment_prefix(&tokens) {
            return Err(ParseError::TypeError { statement: index });
        }
        return Err(ParseError::InvalidSyntax { statement: index });
    }

    match tokens.as_slice() {
        [Token::Var, Token::Identifier(name)] => {
            Ok(ParseRow::Declaration { name:  name.clone(),
                                       value: None, })
        },
        [Token::Var, Token::Identifier(name), Token::Equals, Token::Integer(value)] => {
            Ok(ParseRow::Declaration { name:  name.clone(),
                                       value: Some(*value), })
        },
        [Token::Var, Token::Identifier(_), Token::Equals, ..] => {
            Err(ParseError::TypeError { statement: index })
        },
        [Token::Disp, Token::LParen, Token::Integer(value), Token::RParen] => {
            Ok(ParseRow::DisplayLiteral { value: Literal::Integer(*value) })
        },
        [Token::Disp, Token::LParen, Token::Str(text), Token::RParen] => {
            Ok(ParseRow::DisplayLiteral { value: Literal::Str(text.clone()) })
        },
        [Token::Disp, Token::LParen, Token::Identifier(name), Token::RParen] => {
            Ok(ParseRow::DisplayRef { name: name.clone() })
        },
        _ => Err(ParseError::InvalidSyntax { statement: index }),
    }
}

/// Whether the tokens begin with `var <identifier> =`.
fn is_assignment_prefix(tokens: &[Token]) -> bool {
    matches!(tokens,
             [Token::Var, Token::Identifier(_), Token::Equals, ..])
}
