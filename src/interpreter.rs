/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the expression tree, performs arithmetic, resolves
/// variables, applies assignments and invokes native functions. It owns the
/// session state through its `Context`.
///
/// # Responsibilities
/// - Evaluates AST nodes in post-order.
/// - Maintains variable bindings and the function table across inputs.
/// - Reports runtime errors such as unknown names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source lines for further parsing.
///
/// The lexer reads a raw source line and produces the complete sequence of
/// tokens, each paired with its byte offset. This is the first stage of
/// interpretation and performs no semantic validation.
///
/// # Responsibilities
/// - Converts the input into tokens with category and source offset.
/// - Distinguishes variable references from invocations by lookahead.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser runs the shunting-yard algorithm over the materialized token
/// sequence and produces a single expression tree, honoring precedence and
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into structured `Expr` nodes.
/// - Validates parenthesis balance, operand counts and assignment targets.
/// - Reports parse errors with source offsets.
pub mod parser;
/// The value module defines the runtime data type for evaluation.
///
/// Declares the `Value` enum with its integer and real variants and the
/// checked promotion between them.
pub mod value;
