/// Lexing errors.
///
/// Defines the error type raised while tokenizing a source line. Lexer errors
/// cover input the token rules cannot match and literals that exceed the
/// numeric range.
pub mod lexer_error;
/// Parsing errors.
///
/// Defines the error type raised while turning the token sequence into a
/// syntax tree: unbalanced parentheses, malformed operator usage, argument
/// list mistakes and invalid assignment targets.
pub mod parser_error;
/// Runtime errors.
///
/// Contains the error type raised during evaluation: unknown variables or
/// functions, arity mismatches, division by zero and overflow.
pub mod runtime_error;

pub use lexer_error::LexerError;
pub use parser_error::ParserError;
pub use runtime_error::RuntimeError;
