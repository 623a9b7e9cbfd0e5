/// Core evaluation logic and context management.
///
/// Contains the evaluation context with its variable bindings and function
/// table, and the dispatch over expression variants.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic with integer/real promotion and the assignment
/// operator that mutates the context.
pub mod binary;

/// Function evaluation.
///
/// Defines the native function table (`help`, `exit`), argument evaluation
/// order and arity checking.
pub mod function;
