use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult, util::num::i64_to_f64_checked};

/// Represents a runtime value in the interpreter.
///
/// Results are integral unless a division occurred somewhere in their
/// ancestry: division always produces a real number, so `7 / 2` is `3.5` and
/// even `8 / 2` is the real `4`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit signed).
    Integer(i64),
    /// A real value (double precision floating-point), produced by division.
    Real(f64),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers are promoted only when they are exactly representable as
    /// `f64`.
    ///
    /// # Parameters
    /// - `offset`: Byte offset used for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: The real value.
    /// - `Err(RuntimeError::LiteralTooLarge)`: If the integer cannot be
    ///   promoted without losing precision.
    ///
    /// # Example
    /// ```
    /// use numex::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    ///
    /// assert_eq!(x.as_real(0).unwrap(), 10.0);
    /// ```
    pub fn as_real(&self, offset: usize) -> EvalResult<f64> {
        match self {
            Self::Real(value) => Ok(*value),
            Self::Integer(value) => {
                i64_to_f64_checked(*value, RuntimeError::LiteralTooLarge { offset })
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
        }
    }
}
