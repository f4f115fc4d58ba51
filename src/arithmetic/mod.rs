
mod bindings;
pub use bindings::{
    CheckedFieldArithmetic, Field, FieldArithmetic, FloatArithmetic, IntegerArithmetic,
};

use nalgebra::Scalar;
use std::fmt::Debug;
use thiserror::Error as ThisError;

/// An error that is returned by an [`Arithmetic`] implementation when the
/// concrete number type cannot represent the result of an operation.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ArithmeticError {
    /// The operation is not supported for the given operands, e.g. an inexact
    /// integer division or a division by zero.
    #[error("Unsupported operation '{}': {}", operation, reason)]
    UnsupportedOperation {
        /// name of the operation that failed
        operation: &'static str,
        /// a human readable reason for the failure
        reason: String,
    },
}

impl ArithmeticError {
    /// helper for constructing an [`ArithmeticError::UnsupportedOperation`]
    pub fn unsupported(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation,
            reason: reason.into(),
        }
    }
}

/// # The Arithmetic Contract
///
/// This trait describes the numeric operations that the matrices, equation
/// systems and solvers of this crate rely on. It allows the solvers to be
/// completely generic over the number representation: floating point numbers,
/// checked integers, exact rationals, complex numbers and so on.
///
/// An instance of this trait is a (usually zero sized) value that carries the
/// operations for its [`ScalarType`](Arithmetic::ScalarType). The operations
/// are pure. Any operation that produces a new value may fail with
/// [`ArithmeticError::UnsupportedOperation`] if the concrete type cannot represent
/// the result. Those errors are never caught inside this crate but are propagated
/// to the caller.
///
/// # Zero Tests
///
/// The elimination algorithms decide everything based on [`is_zero`](Arithmetic::is_zero).
/// It must be consistent with [`zero`](Arithmetic::zero) under the type's own equality.
/// For floating point types it is the responsibility of the implementation to decide
/// whether it uses exact comparison or some tolerance.
pub trait Arithmetic: Clone + Debug {
    /// the number type that this arithmetic operates on
    type ScalarType: Scalar;

    /// the additive identity
    fn zero(&self) -> Self::ScalarType;

    /// the multiplicative identity
    fn one(&self) -> Self::ScalarType;

    /// whether the given value is zero in the sense of this arithmetic
    fn is_zero(&self, value: &Self::ScalarType) -> bool;

    /// whether the given value is equal to [`one`](Arithmetic::one)
    fn is_one(&self, value: &Self::ScalarType) -> bool {
        value == &self.one()
    }

    /// convert an integer into the number type
    fn from_int(&self, value: i64) -> Result<Self::ScalarType, ArithmeticError>;

    /// calculate `lhs + rhs`
    fn sum(
        &self,
        lhs: &Self::ScalarType,
        rhs: &Self::ScalarType,
    ) -> Result<Self::ScalarType, ArithmeticError>;

    /// calculate `lhs - rhs`
    fn difference(
        &self,
        lhs: &Self::ScalarType,
        rhs: &Self::ScalarType,
    ) -> Result<Self::ScalarType, ArithmeticError>;

    /// calculate `lhs * rhs`
    fn product(
        &self,
        lhs: &Self::ScalarType,
        rhs: &Self::ScalarType,
    ) -> Result<Self::ScalarType, ArithmeticError>;

    /// calculate `lhs / rhs`
    fn quotient(
        &self,
        lhs: &Self::ScalarType,
        rhs: &Self::ScalarType,
    ) -> Result<Self::ScalarType, ArithmeticError>;

    /// calculate `-value`
    fn negate(&self, value: &Self::ScalarType) -> Result<Self::ScalarType, ArithmeticError>;

    /// calculate `(a + b) + c`
    fn sum3(
        &self,
        a: &Self::ScalarType,
        b: &Self::ScalarType,
        c: &Self::ScalarType,
    ) -> Result<Self::ScalarType, ArithmeticError> {
        self.sum(&self.sum(a, b)?, c)
    }

    /// calculate `(a * b) * c`
    fn product3(
        &self,
        a: &Self::ScalarType,
        b: &Self::ScalarType,
        c: &Self::ScalarType,
    ) -> Result<Self::ScalarType, ArithmeticError> {
        self.product(&self.product(a, b)?, c)
    }
}
