use numex::{
    error::{LexerError, ParserError, RuntimeError},
    eval_source,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{Token, tokenize},
        parser::core::parse,
        value::Value,
    },
};

fn eval_one(source: &str) -> Option<Value> {
    let mut context = Context::new();

    eval_source(source, &mut context).unwrap_or_else(|e| panic!("'{source}' failed: {e}"))
}

fn eval_session(context: &mut Context, lines: &[&str]) -> Option<Value> {
    let mut result = None;

    for line in lines {
        result = eval_source(line, context).unwrap_or_else(|e| panic!("'{line}' failed: {e}"));
    }

    result
}

fn parse_error(source: &str) -> ParserError {
    let tokens = tokenize(source).unwrap();

    parse(&tokens).expect_err("expected the parse to fail")
}

fn runtime_error(context: &mut Context, source: &str) -> RuntimeError {
    let tokens = tokenize(source).unwrap();
    let expr = parse(&tokens).unwrap().unwrap();

    context.eval(&expr).expect_err("expected evaluation to fail")
}

fn first_argument(args: &[Value], _offset: usize) -> EvalResult<Option<Value>> {
    Ok(args.first().copied())
}

fn last_argument(args: &[Value], _offset: usize) -> EvalResult<Option<Value>> {
    Ok(args.last().copied())
}

fn answer(_args: &[Value], _offset: usize) -> EvalResult<Option<Value>> {
    Ok(Some(Value::Integer(42)))
}

fn void(_args: &[Value], _offset: usize) -> EvalResult<Option<Value>> {
    Ok(None)
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval_one("1 + 2"), Some(Value::Integer(3)));
    assert_eq!(eval_one("7 * 9"), Some(Value::Integer(63)));
    assert_eq!(eval_one("8 - 5"), Some(Value::Integer(3)));
    assert_eq!(eval_one("2-10"), Some(Value::Integer(-8)));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval_one("2 + 3 * 4"), Some(Value::Integer(14)));
    assert_eq!(eval_one("2 * 3 + 4"), Some(Value::Integer(10)));
    assert_eq!(eval_one("1 + 8 / 2"), Some(Value::Real(5.0)));
}

#[test]
fn arithmetic_is_left_associative() {
    assert_eq!(eval_one("2 - 3 - 4"), Some(Value::Integer(-5)));
    assert_eq!(eval_one("100 / 10 / 2"), Some(Value::Real(5.0)));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval_one("(20 + 1) * 2"), Some(Value::Integer(42)));
    assert_eq!(eval_one("2 * (3 + 4)"), Some(Value::Integer(14)));
    assert_eq!(eval_one("((((5))))"), Some(Value::Integer(5)));
}

#[test]
fn division_is_always_real() {
    assert_eq!(eval_one("7 / 2"), Some(Value::Real(3.5)));
    assert_eq!(eval_one("8 / 2"), Some(Value::Real(4.0)));
    assert_eq!(eval_one("1 + 7 / 2"), Some(Value::Real(4.5)));
}

#[test]
fn assignment_stores_and_yields_the_value() {
    let mut context = Context::new();

    assert_eq!(eval_session(&mut context, &["a = 5"]), Some(Value::Integer(5)));
    assert_eq!(eval_session(&mut context, &["a"]), Some(Value::Integer(5)));
    assert_eq!(eval_session(&mut context, &["a"]), Some(Value::Integer(5)));
    assert_eq!(eval_session(&mut context, &["a = a + 1", "a * 2"]),
               Some(Value::Integer(12)));
}

#[test]
fn assignment_chains_right_associatively() {
    let mut context = Context::new();

    let result = eval_session(&mut context, &["a = b = 5"]);

    assert_eq!(result, Some(Value::Integer(5)));
    assert_eq!(context.bindings.get("a"), Some(&Value::Integer(5)));
    assert_eq!(context.bindings.get("b"), Some(&Value::Integer(5)));
}

#[test]
fn assignment_to_a_literal_is_rejected_at_parse_time() {
    let error = parse_error("1 = 2");

    assert_eq!(error, ParserError::InvalidAssignmentTarget { offset: 2 });
    assert_eq!(parse_error("f() = 2"),
               ParserError::InvalidAssignmentTarget { offset: 4 });
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert_eq!(parse_error("(1 + 2"),
               ParserError::MismatchedParentheses { offset: 0 });
    assert_eq!(parse_error("1 + 2)"),
               ParserError::MismatchedParentheses { offset: 5 });
    assert_eq!(parse_error("f(1"),
               ParserError::MismatchedParentheses { offset: 1 });
}

#[test]
fn unknown_function_is_reported_at_the_name() {
    let mut context = Context::new();
    let error = runtime_error(&mut context, "foo()");

    assert_eq!(error,
               RuntimeError::UnknownFunction { name:   "foo".to_string(),
                                               offset: 0, });
}

#[test]
fn unknown_variable_is_reported_at_the_reference() {
    let mut context = Context::new();
    let error = runtime_error(&mut context, "1 + x");

    assert_eq!(error,
               RuntimeError::UnknownVariable { name:   "x".to_string(),
                                               offset: 4, });
}

#[test]
fn invocation_requires_the_adjacent_parenthesis() {
    assert_eq!(tokenize("foo(1)").unwrap(),
               vec![(Token::Invoke("foo".to_string()), 0),
                    (Token::LParen, 3),
                    (Token::Integer(1), 4),
                    (Token::RParen, 5)]);

    assert_eq!(tokenize("foo (1)").unwrap(),
               vec![(Token::Identifier("foo".to_string()), 0),
                    (Token::LParen, 4),
                    (Token::Integer(1), 5),
                    (Token::RParen, 6)]);

    // Without the adjacency the name is just a variable next to a group.
    assert!(matches!(parse_error("foo (1)"),
                     ParserError::InvalidExpression { .. }));
}

#[test]
fn arguments_evaluate_left_to_right() {
    let mut context = Context::new();
    context.define_function("f", 2, last_argument);

    let result = eval_session(&mut context, &["f(a = 1, a = 2)"]);

    assert_eq!(result, Some(Value::Integer(2)));
    assert_eq!(context.bindings.get("a"), Some(&Value::Integer(2)));
}

#[test]
fn nested_invocations() {
    let mut context = Context::new();
    context.define_function("identity", 1, first_argument);
    context.define_function("answer", 0, answer);

    assert_eq!(eval_session(&mut context, &["identity(identity(7)) + 1"]),
               Some(Value::Integer(8)));
    assert_eq!(eval_session(&mut context, &["answer() * 2"]),
               Some(Value::Integer(84)));
    assert_eq!(eval_session(&mut context, &["identity((1 + 2) * 3)"]),
               Some(Value::Integer(9)));
}

#[test]
fn argument_list_mistakes_are_rejected() {
    assert_eq!(parse_error("f(1,)"), ParserError::MissingArgument { offset: 4 });
    assert_eq!(parse_error("f(,1)"), ParserError::MissingArgument { offset: 2 });
    assert!(matches!(parse_error("1, 2"),
                     ParserError::UnexpectedToken { offset: 1, .. }));
}

#[test]
fn arity_is_checked_against_the_function_table() {
    let mut context = Context::new();
    let error = runtime_error(&mut context, "help(1)");

    assert_eq!(error,
               RuntimeError::ArgumentCountMismatch { expected: 0,
                                                     found:    1,
                                                     offset:   0, });
}

#[test]
fn void_results_cannot_feed_arithmetic() {
    let mut context = Context::new();
    context.define_function("void", 0, void);

    let error = runtime_error(&mut context, "1 + void()");

    assert_eq!(error, RuntimeError::MissingValue { offset: 4 });
}

#[test]
fn empty_input_produces_nothing() {
    assert_eq!(eval_one(""), None);
    assert_eq!(eval_one("   "), None);
    assert_eq!(eval_one("()"), None);
}

#[test]
fn increment_and_decrement_are_unsupported() {
    assert_eq!(parse_error("++x"),
               ParserError::UnsupportedOperator { operator: "++".to_string(),
                                                  offset:   0, });
    assert_eq!(parse_error("x--"),
               ParserError::UnsupportedOperator { operator: "--".to_string(),
                                                  offset:   1, });
}

#[test]
fn unary_minus_is_not_an_operator() {
    assert_eq!(parse_error("-5"), ParserError::NotEnoughOperands { offset: 0 });
    assert_eq!(parse_error("1 + * 2"),
               ParserError::NotEnoughOperands { offset: 2 });
}

#[test]
fn adjacent_operands_do_not_reduce() {
    assert_eq!(parse_error("1 2"), ParserError::InvalidExpression { offset: 2 });
}

#[test]
fn unrecognized_input_fails_with_its_offset() {
    assert_eq!(tokenize("2 $ 2").unwrap_err(),
               LexerError::UnrecognizedSequence { text:   "$".to_string(),
                                                  offset: 2, });
    assert!(tokenize("2 + A").is_err());
}

#[test]
fn oversized_literals_fail_in_the_lexer() {
    assert_eq!(tokenize("99999999999999999999").unwrap_err(),
               LexerError::LiteralTooLarge { offset: 0 });
}

#[test]
fn integer_overflow_is_reported() {
    let mut context = Context::new();
    let error = runtime_error(&mut context, "9223372036854775807 + 1");

    assert_eq!(error, RuntimeError::Overflow { offset: 20 });
}

#[test]
fn division_by_zero_is_reported() {
    let mut context = Context::new();
    let error = runtime_error(&mut context, "1 / 0");

    assert_eq!(error, RuntimeError::DivisionByZero { offset: 2 });
}

#[test]
fn binary_nodes_carry_the_operator_offset() {
    let tokens = tokenize("1 + 2").unwrap();
    let expr = parse(&tokens).unwrap().unwrap();

    assert_eq!(expr.offset(), 2);
}

#[test]
fn failed_lines_keep_earlier_assignments() {
    let mut context = Context::new();

    eval_session(&mut context, &["a = 1"]);
    let error = runtime_error(&mut context, "(b = 2) + nope");

    assert!(matches!(error, RuntimeError::UnknownVariable { .. }));
    assert_eq!(context.bindings.get("a"), Some(&Value::Integer(1)));
    assert_eq!(context.bindings.get("b"), Some(&Value::Integer(2)));
}
