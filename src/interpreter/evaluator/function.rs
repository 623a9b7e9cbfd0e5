use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

/// Type alias for native function handlers.
///
/// A native function receives the slice of evaluated argument values and the
/// byte offset of the invocation, and returns an optional result value.
/// Functions that yield nothing (such as `help`) return `Ok(None)`.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Option<Value>>;

/// A native function table entry.
///
/// The arity lives next to the implementation: how many arguments a function
/// accepts is the function's own business, not the parser's.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The exact number of arguments the function accepts.
    pub arity: usize,
    /// The native implementation.
    pub func:  BuiltinFn,
}

/// The functions every fresh context starts out with.
pub(crate) const DEFAULT_FUNCTIONS: &[(&str, Builtin)] =
    &[("help", Builtin { arity: 0, func: help }),
      ("exit", Builtin { arity: 0, func: exit })];

const HELP_TEXT: &str = "\
OPERATIONS
      a  variable lookup
  a = b  variable assignment
  a + b  addition
  a - b  subtraction
  a * b  multiplication
  a / b  division
   f(a)  function call
    (a)  grouping

FUNCTIONS
  help()  print this overview
  exit()  terminate the session
";

/// Prints a short overview of the language and yields no value.
pub fn help(_args: &[Value], _offset: usize) -> EvalResult<Option<Value>> {
    print!("{HELP_TEXT}");

    Ok(None)
}

/// Terminates the process.
pub fn exit(_args: &[Value], _offset: usize) -> EvalResult<Option<Value>> {
    std::process::exit(0)
}

impl Context {
    /// Evaluates a function invocation.
    ///
    /// The name is resolved first, so an unknown function is reported at the
    /// identifier's offset before any argument runs. Arguments are then
    /// evaluated strictly left to right; this order is observable when
    /// arguments assign to the same variable. The arity check follows
    /// argument evaluation, so side effects of the arguments are committed
    /// even when the count is wrong.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `offset`: Byte offset of the function name.
    ///
    /// # Returns
    /// Whatever the native function produces, possibly nothing.
    ///
    /// # Errors
    /// - `UnknownFunction` when the name is not in the table.
    /// - `MissingValue` when an argument yields no value.
    /// - `ArgumentCountMismatch` when the argument count disagrees with the
    ///   entry's arity.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     offset: usize)
                                     -> EvalResult<Option<Value>> {
        let Some(builtin) = self.functions.get(name).copied() else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       offset });
        };

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.eval_value(argument)?);
        }

        if values.len() != builtin.arity {
            return Err(RuntimeError::ArgumentCountMismatch { expected: builtin.arity,
                                                             found: values.len(),
                                                             offset });
        }

        (builtin.func)(&values, offset)
    }
}
