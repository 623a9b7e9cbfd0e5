#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum RuntimeError {
    /// Tried to read a variable that has never been assigned.
    UnknownVariable {
        /// The name of the variable.
        name:   String,
        /// The byte offset of the reference.
        offset: usize,
    },
    /// Invoked a function that is not in the function table.
    UnknownFunction {
        /// The name of the function.
        name:   String,
        /// The byte offset of the function name.
        offset: usize,
    },
    /// Tried to assign to something that is not a variable.
    CannotAssign {
        /// The byte offset of the `=` operator.
        offset: usize,
    },
    /// A function was invoked with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The number of arguments the function accepts.
        expected: usize,
        /// The number of arguments that were supplied.
        found:    usize,
        /// The byte offset of the function name.
        offset:   usize,
    },
    /// An expected value was missing (e.g. a void function result used as an
    /// operand).
    MissingValue {
        /// The byte offset of the expression that produced nothing.
        offset: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the `/` operator.
        offset: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The byte offset of the operator.
        offset: usize,
    },
    /// An integer was too large to take part in real arithmetic.
    LiteralTooLarge {
        /// The byte offset of the operator.
        offset: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, offset } => {
                write!(f, "Error at offset {offset}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, offset } => {
                write!(f, "Error at offset {offset}: Unknown function '{name}'.")
            },
            Self::CannotAssign { offset } => {
                write!(f, "Error at offset {offset}: Can't assign to an rvalue.")
            },
            Self::ArgumentCountMismatch { expected,
                                          found,
                                          offset, } => write!(f,
                                                              "Error at offset {offset}: Expected {expected} arguments, but found {found}."),

            Self::MissingValue { offset } => write!(f, "Error at offset {offset}: Value missing."),
            Self::DivisionByZero { offset } => {
                write!(f, "Error at offset {offset}: Division by zero.")
            },
            Self::Overflow { offset } => write!(f,
                                                "Error at offset {offset}: Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { offset } => write!(f,
                                                       "Error at offset {offset}: Integer is too large to be used in real arithmetic."),
        }
    }
}

impl std::error::Error for RuntimeError {}
