use super::{Arithmetic, ArithmeticError};
use nalgebra::Scalar;
use num_complex::Complex;
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Float, Num, NumCast, PrimInt, Signed,
};
use std::marker::PhantomData;
use std::ops::Neg;

/// Arithmetic for the floating point types `f32` and `f64`.
///
/// By default a value is only considered zero if it compares equal to zero.
/// Elimination on floating point data with rounding errors can then classify
/// a system as unsolvable or as having infinitely many solutions where a
/// tolerant comparison would not. Use [`FloatArithmetic::with_tolerance`]
/// to define an absolute tolerance below which values count as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatArithmetic<F> {
    tolerance: F,
}

impl<F: Float> FloatArithmetic<F> {
    /// arithmetic with exact zero comparison
    pub fn new() -> Self {
        Self {
            tolerance: F::zero(),
        }
    }

    /// arithmetic where every value `x` with `|x| <= tolerance` is considered zero.
    /// # Panics
    /// if the tolerance is negative or NaN
    pub fn with_tolerance(tolerance: F) -> Self {
        assert!(
            tolerance >= F::zero(),
            "Zero tolerance must be a non-negative number."
        );
        Self { tolerance }
    }

    /// the absolute tolerance for zero comparisons
    pub fn tolerance(&self) -> F {
        self.tolerance
    }
}

impl<F: Float> Default for FloatArithmetic<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float + Scalar> Arithmetic for FloatArithmetic<F> {
    type ScalarType = F;

    fn zero(&self) -> F {
        F::zero()
    }

    fn one(&self) -> F {
        F::one()
    }

    fn is_zero(&self, value: &F) -> bool {
        if self.tolerance == F::zero() {
            *value == F::zero()
        } else {
            value.abs() <= self.tolerance
        }
    }

    fn from_int(&self, value: i64) -> Result<F, ArithmeticError> {
        <F as NumCast>::from(value).ok_or_else(|| {
            ArithmeticError::unsupported("from_int", format!("{} is not representable", value))
        })
    }

    fn sum(&self, lhs: &F, rhs: &F) -> Result<F, ArithmeticError> {
        Ok(*lhs + *rhs)
    }

    fn difference(&self, lhs: &F, rhs: &F) -> Result<F, ArithmeticError> {
        Ok(*lhs - *rhs)
    }

    fn product(&self, lhs: &F, rhs: &F) -> Result<F, ArithmeticError> {
        Ok(*lhs * *rhs)
    }

    fn quotient(&self, lhs: &F, rhs: &F) -> Result<F, ArithmeticError> {
        if *rhs == F::zero() {
            return Err(ArithmeticError::unsupported("quotient", "division by zero"));
        }
        Ok(*lhs / *rhs)
    }

    fn negate(&self, value: &F) -> Result<F, ArithmeticError> {
        Ok(-*value)
    }
}

/// Checked arithmetic for signed primitive integers.
///
/// Overflows are reported as unsupported operations. A quotient is only
/// supported if the division is exact, so most systems with non-unit pivots
/// cannot be solved with this arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerArithmetic<I> {
    phantom: PhantomData<I>,
}

impl<I> IntegerArithmetic<I> {
    /// create a new integer arithmetic
    pub fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<I> Default for IntegerArithmetic<I> {
    fn default() -> Self {
        Self::new()
    }
}

fn overflow<I: std::fmt::Debug>(operation: &'static str, lhs: &I, rhs: &I) -> ArithmeticError {
    ArithmeticError::unsupported(
        operation,
        format!("overflow for operands {:?} and {:?}", lhs, rhs),
    )
}

impl<I> Arithmetic for IntegerArithmetic<I>
where
    I: PrimInt + Signed + Scalar,
{
    type ScalarType = I;

    fn zero(&self) -> I {
        I::zero()
    }

    fn one(&self) -> I {
        I::one()
    }

    fn is_zero(&self, value: &I) -> bool {
        *value == I::zero()
    }

    fn from_int(&self, value: i64) -> Result<I, ArithmeticError> {
        <I as NumCast>::from(value).ok_or_else(|| {
            ArithmeticError::unsupported("from_int", format!("{} is out of range", value))
        })
    }

    fn sum(&self, lhs: &I, rhs: &I) -> Result<I, ArithmeticError> {
        lhs.checked_add(rhs).ok_or_else(|| overflow("sum", lhs, rhs))
    }

    fn difference(&self, lhs: &I, rhs: &I) -> Result<I, ArithmeticError> {
        lhs.checked_sub(rhs)
            .ok_or_else(|| overflow("difference", lhs, rhs))
    }

    fn product(&self, lhs: &I, rhs: &I) -> Result<I, ArithmeticError> {
        lhs.checked_mul(rhs).ok_or_else(|| overflow("product", lhs, rhs))
    }

    fn quotient(&self, lhs: &I, rhs: &I) -> Result<I, ArithmeticError> {
        if *rhs == I::zero() {
            return Err(ArithmeticError::unsupported("quotient", "division by zero"));
        }
        let quotient = lhs
            .checked_div(rhs)
            .ok_or_else(|| overflow("quotient", lhs, rhs))?;
        if quotient * *rhs != *lhs {
            return Err(ArithmeticError::unsupported(
                "quotient",
                format!("{:?} is not divisible by {:?}", lhs, rhs),
            ));
        }
        Ok(quotient)
    }

    fn negate(&self, value: &I) -> Result<I, ArithmeticError> {
        I::zero()
            .checked_sub(value)
            .ok_or_else(|| overflow("negate", &I::zero(), value))
    }
}

/// Marker for number types whose `+`, `-`, `*`, `/` and negation are field
/// operations that never panic or overflow, e.g. `num_complex::Complex<f64>`.
///
/// Primitive integers are not fields: their quotient truncates. Bounded types
/// like `num_rational::Ratio<i64>` are not either, because their operations
/// overflow. Use [`IntegerArithmetic`] or [`CheckedFieldArithmetic`] for those.
pub trait Field: Scalar + Num + Neg<Output = Self> {}

impl<F: Float + Scalar> Field for Complex<F> {}

/// Arithmetic for types that implement [`Field`].
///
/// Zero comparison uses the type's own equality, so floating point based
/// fields (like `Complex<f64>`) are compared exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldArithmetic<T> {
    phantom: PhantomData<T>,
}

impl<T> FieldArithmetic<T> {
    /// create a new field arithmetic
    pub fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<T> Default for FieldArithmetic<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Field> Arithmetic for FieldArithmetic<T> {
    type ScalarType = T;

    fn zero(&self) -> T {
        T::zero()
    }

    fn one(&self) -> T {
        T::one()
    }

    fn is_zero(&self, value: &T) -> bool {
        value.is_zero()
    }

    fn from_int(&self, value: i64) -> Result<T, ArithmeticError> {
        // binary expansion, so only the field operations are required
        let mut remaining = value.unsigned_abs();
        let mut power = T::one();
        let mut result = T::zero();
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result + power.clone();
            }
            remaining >>= 1;
            if remaining > 0 {
                power = power.clone() + power;
            }
        }
        if value < 0 {
            result = -result;
        }
        Ok(result)
    }

    fn sum(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        Ok(lhs.clone() + rhs.clone())
    }

    fn difference(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        Ok(lhs.clone() - rhs.clone())
    }

    fn product(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        Ok(lhs.clone() * rhs.clone())
    }

    fn quotient(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::unsupported("quotient", "division by zero"));
        }
        Ok(lhs.clone() / rhs.clone())
    }

    fn negate(&self, value: &T) -> Result<T, ArithmeticError> {
        Ok(-value.clone())
    }
}

/// Checked arithmetic for exact number types with a bounded representation,
/// most importantly `num_rational::Ratio<i64>`.
///
/// Every operation goes through the `Checked*` traits of `num_traits`, so
/// overflowing numerators or denominators are reported as unsupported
/// operations instead of panicking. A quotient is only supported if it is
/// exact, i.e. `(lhs / rhs) * rhs == lhs`. For primitive integers this
/// behaves like [`IntegerArithmetic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedFieldArithmetic<T> {
    phantom: PhantomData<T>,
}

impl<T> CheckedFieldArithmetic<T> {
    /// create a new checked field arithmetic
    pub fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<T> Default for CheckedFieldArithmetic<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arithmetic for CheckedFieldArithmetic<T>
where
    T: Scalar + Num + CheckedAdd + CheckedSub + CheckedMul + CheckedDiv,
{
    type ScalarType = T;

    fn zero(&self) -> T {
        T::zero()
    }

    fn one(&self) -> T {
        T::one()
    }

    fn is_zero(&self, value: &T) -> bool {
        value.is_zero()
    }

    fn from_int(&self, value: i64) -> Result<T, ArithmeticError> {
        let out_of_range =
            || ArithmeticError::unsupported("from_int", format!("{} is out of range", value));
        let mut remaining = value.unsigned_abs();
        let mut power = T::one();
        let mut result = T::zero();
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.checked_add(&power).ok_or_else(out_of_range)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                power = power.checked_add(&power).ok_or_else(out_of_range)?;
            }
        }
        if value < 0 {
            result = T::zero().checked_sub(&result).ok_or_else(out_of_range)?;
        }
        Ok(result)
    }

    fn sum(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        lhs.checked_add(rhs).ok_or_else(|| overflow("sum", lhs, rhs))
    }

    fn difference(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        lhs.checked_sub(rhs)
            .ok_or_else(|| overflow("difference", lhs, rhs))
    }

    fn product(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        lhs.checked_mul(rhs).ok_or_else(|| overflow("product", lhs, rhs))
    }

    fn quotient(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::unsupported("quotient", "division by zero"));
        }
        let quotient = lhs
            .checked_div(rhs)
            .ok_or_else(|| overflow("quotient", lhs, rhs))?;
        if quotient.checked_mul(rhs).as_ref() != Some(lhs) {
            return Err(ArithmeticError::unsupported(
                "quotient",
                format!("{:?} is not divisible by {:?}", lhs, rhs),
            ));
        }
        Ok(quotient)
    }

    fn negate(&self, value: &T) -> Result<T, ArithmeticError> {
        T::zero()
            .checked_sub(value)
            .ok_or_else(|| overflow("negate", &T::zero(), value))
    }
}
