use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary operation node.
    ///
    /// Assignment is routed to its own handler because its left child must
    /// not be evaluated; every other operator evaluates both children first
    /// and combines the results.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 offset: usize)
                                 -> EvalResult<Option<Value>> {
        if op == BinaryOperator::Assign {
            return self.eval_assignment(left, right, offset);
        }

        let lhs = self.eval_value(left)?;
        let rhs = self.eval_value(right)?;

        Ok(Some(Self::eval_arithmetic(op, lhs, rhs, offset)?))
    }

    /// Evaluates an assignment and stores the result in the context.
    ///
    /// The left child is inspected structurally to obtain the target name.
    /// The parser already rejects non-variable targets, but a tree built by
    /// any other producer is re-checked here.
    ///
    /// Assignment is an expression: the stored value is also the result,
    /// which makes `a = b = 1` bind both names.
    fn eval_assignment(&mut self,
                       left: &Expr,
                       right: &Expr,
                       offset: usize)
                       -> EvalResult<Option<Value>> {
        let Expr::Variable { name, .. } = left else {
            return Err(RuntimeError::CannotAssign { offset });
        };

        let value = self.eval_value(right)?;
        self.bindings.insert(name.clone(), value);

        Ok(Some(value))
    }

    /// Combines two values with an arithmetic operator.
    ///
    /// Integer operands stay integral under `+`, `-` and `*`, with overflow
    /// checked. Division always promotes to real and never truncates, so
    /// `7 / 2` is `3.5`. A real operand on either side promotes the other
    /// side as well.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator (`Assign` never reaches this).
    /// - `left`: Left operand value.
    /// - `right`: Right operand value.
    /// - `offset`: Byte offset of the operator, for error reporting.
    ///
    /// # Returns
    /// The combined value.
    ///
    /// # Example
    /// ```
    /// use numex::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Div,
    ///                                       Value::Integer(7),
    ///                                       Value::Integer(2),
    ///                                       0).unwrap();
    ///
    /// assert_eq!(result, Value::Real(3.5));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: Value,
                           right: Value,
                           offset: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Assign, Div, Mul, Sub};
        use Value::{Integer, Real};

        if op == Div {
            let lhs = left.as_real(offset)?;
            let rhs = right.as_real(offset)?;

            if rhs == 0.0 {
                return Err(RuntimeError::DivisionByZero { offset });
            }

            return Ok(Real(lhs / rhs));
        }

        match (left, right) {
            (Integer(lhs), Integer(rhs)) => {
                let result = match op {
                    Add => lhs.checked_add(rhs),
                    Sub => lhs.checked_sub(rhs),
                    Mul => lhs.checked_mul(rhs),
                    Div | Assign => unreachable!(),
                };

                result.map(Integer).ok_or(RuntimeError::Overflow { offset })
            },
            _ => {
                let lhs = left.as_real(offset)?;
                let rhs = right.as_real(offset)?;

                Ok(Real(match op {
                            Add => lhs + rhs,
                            Sub => lhs - rhs,
                            Mul => lhs * rhs,
                            Div | Assign => unreachable!(),
                        }))
            },
        }
    }
}
