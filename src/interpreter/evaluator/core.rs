use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::function::{Builtin, BuiltinFn, DEFAULT_FUNCTIONS},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable bindings mutated by
/// `=` and the table of native functions that can be invoked.
///
/// ## Usage
///
/// A `Context` is created once per interactive session and reused for every
/// line, so bindings survive from one input to the next. It is always passed
/// explicitly; there is no global state.
pub struct Context {
    /// A mapping from variable names to their current values.
    /// Only assignment writes to it; a failed line leaves behind exactly the
    /// assignments that completed before the failure.
    pub bindings:  HashMap<String, Value>,
    /// A mapping from function names to their native implementations.
    /// Pre-populated with `help` and `exit`.
    pub functions: HashMap<String, Builtin>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no bindings and the default
    /// function table.
    #[must_use]
    pub fn new() -> Self {
        let functions = DEFAULT_FUNCTIONS.iter()
                                         .map(|(name, builtin)| ((*name).to_string(), *builtin))
                                         .collect();

        Self { bindings: HashMap::new(),
               functions }
    }

    /// Registers a native function under the given name.
    ///
    /// Collaborators (and tests) use this to extend the function table beyond
    /// the defaults. An existing entry with the same name is replaced.
    pub fn define_function(&mut self, name: &str, arity: usize, func: BuiltinFn) {
        self.functions.insert(name.to_string(), Builtin { arity, func });
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The tree is walked in
    /// post-order: children produce their values before the parent combines
    /// them. The single exception is assignment, where the left child is
    /// inspected structurally instead of being evaluated.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for
    /// invocations of functions that yield nothing (such as `help()`).
    ///
    /// # Errors
    /// Any `RuntimeError` raised by a subtree aborts the whole evaluation;
    /// assignments committed before the failure remain in place.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Integer { value, .. } => Ok(Some(Value::Integer(*value))),
            Expr::Variable { name, offset } => self.eval_variable(name, *offset),
            Expr::FunctionCall { name,
                                 arguments,
                                 offset, } => self.eval_function_call(name, arguments, *offset),
            Expr::BinaryOp { left,
                             op,
                             right,
                             offset, } => self.eval_binary_op(left, *op, right, *offset),
        }
    }

    /// Evaluates an expression that must produce a value.
    ///
    /// Used wherever a subexpression feeds an operator or an argument list; a
    /// void result is an error at that subexpression's offset.
    pub(crate) fn eval_value(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.eval(expr)?
            .ok_or(RuntimeError::MissingValue { offset: expr.offset() })
    }

    /// Looks up a variable binding.
    fn eval_variable(&self, name: &str, offset: usize) -> EvalResult<Option<Value>> {
        match self.bindings.get(name) {
            Some(value) => Ok(Some(*value)),
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        offset }),
        }
    }
}
