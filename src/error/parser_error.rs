#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParserError {
    /// A parenthesis has no counterpart.
    MismatchedParentheses {
        /// The byte offset of the unmatched parenthesis.
        offset: usize,
    },
    /// An operator was applied with fewer than two operands available.
    NotEnoughOperands {
        /// The byte offset of the operator.
        offset: usize,
    },
    /// The input did not reduce to a single expression.
    InvalidExpression {
        /// The byte offset of the first operand that is left over.
        offset: usize,
    },
    /// The left side of an assignment was not a variable.
    InvalidAssignmentTarget {
        /// The byte offset of the `=` operator.
        offset: usize,
    },
    /// An operator is recognized by the lexer but carries no semantics.
    UnsupportedOperator {
        /// The operator as written in the source.
        operator: String,
        /// The byte offset of the operator.
        offset:   usize,
    },
    /// Found a token in a position where it cannot appear.
    UnexpectedToken {
        /// The token as written in the source.
        token:  String,
        /// The byte offset of the token.
        offset: usize,
    },
    /// An argument list contains an empty argument slot.
    MissingArgument {
        /// The byte offset where an argument was expected.
        offset: usize,
    },
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses { offset } => {
                write!(f, "Error at offset {offset}: Mismatched parentheses.")
            },

            Self::NotEnoughOperands { offset } => {
                write!(f, "Error at offset {offset}: Not enough operands for the operator.")
            },

            Self::InvalidExpression { offset } => write!(f,
                                                         "Error at offset {offset}: The input does not reduce to a single expression."),

            Self::InvalidAssignmentTarget { offset } => write!(f,
                                                               "Error at offset {offset}: Left side of assignment is not assignable."),

            Self::UnsupportedOperator { operator, offset } => write!(f,
                                                                     "Error at offset {offset}: The operator '{operator}' is not supported."),

            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at offset {offset}: Unexpected token: {token}.")
            },

            Self::MissingArgument { offset } => {
                write!(f, "Error at offset {offset}: Expected an argument expression.")
            },
        }
    }
}

impl std::error::Error for ParserError {}
