use logos::Logos;

use crate::error::LexerError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Two-character operators are listed before their one-character prefixes so
/// that `++` never lexes as two `+` tokens. Whether `++`/`--` act as prefix or
/// postfix is not the lexer's call; the parser decides from local context.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// An identifier directly followed by `(`, such as `f` in `f(1)`.
    /// Only the name is captured; the parenthesis is emitted as a separate
    /// [`Token::LParen`] by [`tokenize`].
    #[regex(r"[_a-z][_a-z0-9]*\(", invocation_name)]
    Invoke(String),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    /// A leading digit is impossible here because the integer rule claims it
    /// first.
    #[regex(r"[_a-z][_a-z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `++`
    #[token("++")]
    Increment,
    /// `--`
    #[token("--")]
    Decrement,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal exceeds the `i64` range, which surfaces as a
///   lexing error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extracts the function name from an invocation match.
///
/// The invocation rule matches the trailing `(` so that `f(1)` and `f (1)`
/// lex differently, but the parenthesis itself is not part of the name.
fn invocation_name(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[..slice.len() - 1].to_string()
}

/// Converts a source line into its full token sequence.
///
/// Tokens are materialized into a vector of `(token, byte offset)` pairs
/// before any parsing starts, which gives the parser cheap lookahead over the
/// whole line. The lexer performs no semantic validation; balanced
/// parentheses and operator placement are the parser's job.
///
/// # Parameters
/// - `source`: The source line to tokenize.
///
/// # Returns
/// The ordered token sequence. An empty or blank-only line yields an empty
/// vector, which is success.
///
/// # Errors
/// - `LexerError::LiteralTooLarge` for an integer literal outside the `i64`
///   range.
/// - `LexerError::UnrecognizedSequence` for any input no token rule matches.
///
/// # Example
/// ```
/// use numex::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x + 1").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 0),
///                 (Token::Plus, 2),
///                 (Token::Integer(1), 4)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexerError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;

        match token {
            Ok(Token::Invoke(name)) => {
                // Re-emit the `(` the invocation rule consumed, at its own
                // offset, so the parser sees the same stream as for `x (1)`.
                let open_offset = lexer.span().end - 1;
                tokens.push((Token::Invoke(name), offset));
                tokens.push((Token::LParen, open_offset));
            },
            Ok(token) => tokens.push((token, offset)),
            Err(()) => {
                let text = lexer.slice();

                // The only rule with a fallible callback is the integer rule.
                if text.as_bytes().first().is_some_and(u8::is_ascii_digit) {
                    return Err(LexerError::LiteralTooLarge { offset });
                }

                return Err(LexerError::UnrecognizedSequence { text: text.to_string(),
                                                              offset });
            },
        }
    }

    Ok(tokens)
}
