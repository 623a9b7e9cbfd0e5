use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParserError,
    interpreter::{
        lexer::Token,
        parser::precedence::{Associativity, associativity, precedence, token_to_binary_operator},
    },
};

pub type ParseResult<T> = Result<T, ParserError>;

/// Distinguishes a top-level parse from the parse of one invocation argument.
///
/// An argument parse must stop (without consuming) at the first `,` or `)`
/// that belongs to the enclosing invocation, and an empty result is an error
/// there instead of meaning "blank line".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ExprContext {
    TopLevel,
    Argument,
}

/// Parses a token sequence into a single expression tree.
///
/// This is the entry point for parsing. The whole token sequence must reduce
/// to exactly one expression; leftovers are rejected.
///
/// # Parameters
/// - `tokens`: The materialized `(token, offset)` sequence from the lexer.
///
/// # Returns
/// The root of the expression tree, or `None` when the sequence is empty.
///
/// # Errors
/// Returns a `ParserError` if:
/// - parentheses are unbalanced,
/// - an operator lacks operands, or the input leaves more than one operand,
/// - an assignment targets something other than a variable,
/// - an unsupported operator (`++`, `--`) appears.
///
/// # Example
/// ```
/// use numex::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("(20 + 1) * 2").unwrap();
/// let expr = parse(&tokens).unwrap().unwrap();
///
/// // The root operator is the `*` at offset 9.
/// assert_eq!(expr.offset(), 9);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Option<Expr>> {
    let mut iter = tokens.iter().peekable();

    parse_expression(&mut iter, ExprContext::TopLevel)
}

/// Runs the shunting-yard loop over the remaining tokens.
///
/// Operands are pushed as leaf expressions; operators wait on their own stack
/// until precedence or a closing parenthesis forces application. In argument
/// context the loop ends at the first top-level `,` or `)` so the enclosing
/// invocation can consume it.
fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                           context: ExprContext)
                           -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut parser = ExprParser::new();

    while let Some((token, offset)) = tokens.peek() {
        let token = token.clone();
        let offset = *offset;

        match token {
            Token::Integer(value) => {
                tokens.next();
                parser.operands.push(Expr::Integer { value, offset });
            },

            Token::Identifier(name) => {
                tokens.next();
                parser.operands.push(Expr::Variable { name, offset });
            },

            Token::Invoke(_) => {
                let call = parse_invocation(tokens)?;
                parser.operands.push(call);
            },

            Token::LParen => {
                tokens.next();
                parser.operators.push((Token::LParen, offset));
            },

            Token::RParen => {
                if context == ExprContext::Argument && !parser.contains_open_paren() {
                    break;
                }

                tokens.next();
                parser.close_group(offset)?;
            },

            Token::Comma => {
                if context == ExprContext::Argument && !parser.contains_open_paren() {
                    break;
                }

                return Err(ParserError::UnexpectedToken { token: ",".to_string(),
                                                          offset });
            },

            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Equals => {
                tokens.next();
                parser.push_operator(token, offset)?;
            },

            Token::Increment => {
                return Err(ParserError::UnsupportedOperator { operator: "++".to_string(),
                                                              offset });
            },

            Token::Decrement => {
                return Err(ParserError::UnsupportedOperator { operator: "--".to_string(),
                                                              offset });
            },
        }
    }

    parser.finalize()
}

/// Parses one invocation: the name, the parenthesized argument list, and the
/// closing parenthesis.
///
/// Each argument is a full expression parsed with the same algorithm as the
/// surrounding input. `f()` is legal and yields zero arguments; an empty
/// argument slot such as `f(1,)` or `f(,1)` is rejected.
fn parse_invocation<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, offset) = match tokens.next() {
        Some((Token::Invoke(name), offset)) => (name.clone(), *offset),
        _ => unreachable!("the caller peeked an invocation token"),
    };
    let open_offset = match tokens.next() {
        Some((Token::LParen, open_offset)) => *open_offset,
        _ => unreachable!("the lexer emits `(` directly behind an invocation token"),
    };

    let mut arguments = Vec::new();

    if tokens.peek().is_none() {
        return Err(ParserError::MismatchedParentheses { offset: open_offset });
    }

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       offset });
    }

    loop {
        match parse_expression(tokens, ExprContext::Argument)? {
            Some(argument) => arguments.push(argument),
            None => {
                let offset = tokens.peek().map_or(open_offset, |(_, offset)| *offset);

                return Err(ParserError::MissingArgument { offset });
            },
        }

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            None => return Err(ParserError::MismatchedParentheses { offset: open_offset }),
            Some(_) => unreachable!("argument parsing stops at `,` or `)`"),
        }
    }

    Ok(Expr::FunctionCall { name,
                            arguments,
                            offset })
}

/// The two explicit stacks of the shunting-yard algorithm.
///
/// Operator stack entries keep their source token so that precedence lookups
/// and diagnostics work on the original spelling; the opening parenthesis
/// shares the stack as a scope marker.
struct ExprParser {
    operands:  Vec<Expr>,
    operators: Vec<(Token, usize)>,
}

impl ExprParser {
    const fn new() -> Self {
        Self { operands:  Vec::new(),
               operators: Vec::new(), }
    }

    /// Whether an unclosed `(` is still open in this parse.
    fn contains_open_paren(&self) -> bool {
        self.operators
            .iter()
            .any(|(token, _)| matches!(token, Token::LParen))
    }

    /// Handles an incoming infix operator.
    ///
    /// Applies every stacked operator that outranks the incoming one (or ties
    /// with it, for left-associative operators), then stacks the newcomer.
    /// The parenthesis sentinel ranks below everything and is never applied
    /// here.
    fn push_operator(&mut self, token: Token, offset: usize) -> ParseResult<()> {
        while let Some((top, _)) = self.operators.last() {
            let applies = match associativity(top) {
                Associativity::Left => precedence(top) >= precedence(&token),
                Associativity::Right => precedence(top) > precedence(&token),
            };

            if !applies {
                break;
            }

            self.apply()?;
        }

        self.operators.push((token, offset));
        Ok(())
    }

    /// Handles a consumed `)` by applying operators back to the matching `(`.
    ///
    /// The caller has either verified that an open `(` exists or wants the
    /// mismatch reported at the `)` offset.
    fn close_group(&mut self, offset: usize) -> ParseResult<()> {
        while let Some((token, _)) = self.operators.last() {
            if matches!(token, Token::LParen) {
                self.operators.pop();

                return Ok(());
            }

            self.apply()?;
        }

        Err(ParserError::MismatchedParentheses { offset })
    }

    /// Pops one operator and two operands and pushes the combined node.
    ///
    /// Assignment is validated here, at apply time, because this is the only
    /// place where the left-hand subtree is still available unwrapped.
    fn apply(&mut self) -> ParseResult<()> {
        let Some((token, offset)) = self.operators.pop() else {
            unreachable!("apply is only called while operators remain");
        };
        let Some(op) = token_to_binary_operator(&token) else {
            unreachable!("grouping tokens never reach apply");
        };

        let rhs = self.operands
                      .pop()
                      .ok_or(ParserError::NotEnoughOperands { offset })?;
        let lhs = self.operands
                      .pop()
                      .ok_or(ParserError::NotEnoughOperands { offset })?;

        if op == BinaryOperator::Assign && !matches!(lhs, Expr::Variable { .. }) {
            return Err(ParserError::InvalidAssignmentTarget { offset });
        }

        self.operands.push(Expr::BinaryOp { left: Box::new(lhs),
                                            op,
                                            right: Box::new(rhs),
                                            offset });
        Ok(())
    }

    /// Drains the operator stack and checks that exactly one operand remains.
    ///
    /// Zero operands mean the input was empty; the caller decides whether
    /// that is acceptable. A leftover `(` is a mismatch reported at its own
    /// offset.
    fn finalize(mut self) -> ParseResult<Option<Expr>> {
        while let Some((token, offset)) = self.operators.last() {
            if matches!(token, Token::LParen) {
                return Err(ParserError::MismatchedParentheses { offset: *offset });
            }

            self.apply()?;
        }

        if self.operands.len() > 1 {
            return Err(ParserError::InvalidExpression { offset: self.operands[1].offset() });
        }

        Ok(self.operands.pop())
    }
}
