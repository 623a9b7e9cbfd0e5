/// Core parsing logic.
///
/// Contains the shunting-yard expression parser, the operand/operator stacks
/// and the argument list handling for invocations.
pub mod core;

/// Operator classification.
///
/// Defines the precedence table, associativity rules and the mapping from
/// operator tokens to AST operators.
pub mod precedence;
