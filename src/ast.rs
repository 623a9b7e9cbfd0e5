/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every construct the language knows: integer literals,
/// variable references, function invocations and binary operations. Each
/// variant records the byte offset of the token that introduced it, so that
/// errors raised long after lexing can still point back into the source line.
///
/// Every subtree is exclusively owned; expressions form a tree, never a graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal such as `42`.
    Integer {
        /// The literal value.
        value:  i64,
        /// Byte offset of the literal in the source line.
        offset: usize,
    },
    /// Reference to a variable by name, either read or assigned to.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Byte offset of the name in the source line.
        offset: usize,
    },
    /// A function invocation such as `f(1, 2)`.
    FunctionCall {
        /// Name of the function being invoked.
        name:      String,
        /// Argument expressions, in source order.
        arguments: Vec<Self>,
        /// Byte offset of the function name, not of the parenthesis.
        offset:    usize,
    },
    /// A binary operation (arithmetic or assignment).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator token.
        offset: usize,
    },
}

impl Expr {
    /// Gets the source offset from `self`.
    ///
    /// Offsets exist for error display only; evaluation never consults them
    /// for ordering.
    ///
    /// ## Example
    /// ```
    /// use numex::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   "x".to_string(),
    ///                             offset: 4, };
    ///
    /// assert_eq!(expr.offset(), 4);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Integer { offset, .. }
            | Self::Variable { offset, .. }
            | Self::FunctionCall { offset, .. }
            | Self::BinaryOp { offset, .. } => *offset,
        }
    }
}

/// Represents a binary operator.
///
/// Assignment is an operator like any other: it produces the assigned value,
/// which is what makes chains such as `a = b = 1` work.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Assignment (`=`)
    Assign,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Assign => "=",
        };
        write!(f, "{operator}")
    }
}
