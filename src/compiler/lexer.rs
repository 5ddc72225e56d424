use logos::Logos;

/// Represents a lexical token within a single My statement.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Literal recognition is ordered by the rules below: an argument is matched
/// as an integer literal first, then as a quoted string, then as a bare
/// identifier.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `var`
    #[token("var")]
    Var,
    /// `disp`
    #[token("disp")]
    Disp,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`, stored without their
    /// surrounding quotes.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// Identifier tokens; variable names such as `x` or `counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Tabs, spaces and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// A tokenized statement.
///
/// Spans the lexer could not match (or literals that overflow an `i64`) do
/// not abort tokenization; the position of the first such span is recorded
/// so the classifier can report the statement and move on to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexedStatement {
    /// The tokens that lexed successfully, in source order.
    pub tokens:      Vec<Token>,
    /// The token-position of the first span the lexer could not match, if
    /// any.
    pub first_error: Option<usize>,
}

/// Tokenizes a single statement.
///
/// # Parameters
/// - `statement`: One trimmed statement, as produced by the splitter.
///
/// # Returns
/// The statement's tokens together with the position of the first unlexable
/// span.
///
/// ## Example
/// ```
/// use myc::compiler::lexer::{Token, tokenize_statement};
///
/// let lexed = tokenize_statement("disp(42)");
///
/// assert_eq!(lexed.first_error, None);
/// assert_eq!(lexed.tokens,
///            vec![Token::Disp, Token::LParen, Token::Integer(42), Token::RParen]);
/// ```
#[must_use]
pub fn tokenize_statement(statement: &str) -> LexedStatement {
    let mut tokens = Vec::new();
    let mut first_error = None;

    for token in Token::lexer(statement) {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                if first_error.is_none() {
                    first_error = Some(tokens.len());
                }
            },
        }
    }

    LexedStatement { tokens, first_error }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The quoted text without its delimiters.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
