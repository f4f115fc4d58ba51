#[cfg(test)]
mod test;

use crate::arithmetic::{Arithmetic, ArithmeticError};
use crate::matrix::{Matrix, MatrixError};
use crate::solution::Solution;
use crate::solvers::gauss::GaussSolver;
use crate::solvers::{LinearSolver, SolverError};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use thiserror::Error as ThisError;

/// Errors that occur when constructing an equation system
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SystemError {
    /// An equation system needs at least one row and one column
    #[error(
        "Equation system of dimension {}x{} is empty. It needs at least one equation and a solution column.",
        nrows,
        ncols
    )]
    EmptySystem {
        /// the number of rows of the given matrix
        nrows: usize,
        /// the number of columns of the given matrix
        ncols: usize,
    },
    /// The matrix could not be constructed
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// # A System of Linear Equations
///
/// The system is stored as a single matrix with `rows` equations. The
/// last column holds the right hand side (the *solution column*), the columns
/// before it hold the coefficients of the unknowns. So the system
/// ```math
/// \begin{aligned}
/// x + 2y &= 3 \\
/// 4x + 5y &= 6
/// \end{aligned}
/// ```
/// is the matrix `[[1, 2, 3], [4, 5, 6]]`. The well formed case for solving is
/// a square coefficient part, i.e. `cols == rows + 1`, but other shapes are
/// valid and are classified by the solvers.
///
/// An equation system is immutable. The row and column transformations return
/// new equation systems.
#[derive(Debug, Clone)]
pub struct EquationSystem<A: Arithmetic> {
    matrix: Matrix<A>,
}

impl<A: Arithmetic> EquationSystem<A> {
    /// create an equation system from a coefficient and solution matrix.
    /// Fails if the matrix has no rows or no columns.
    pub fn new(matrix: Matrix<A>) -> Result<Self, SystemError> {
        if matrix.nrows() == 0 || matrix.ncols() == 0 {
            return Err(SystemError::EmptySystem {
                nrows: matrix.nrows(),
                ncols: matrix.ncols(),
            });
        }
        Ok(Self { matrix })
    }

    /// create an equation system from the rows of its matrix
    pub fn from_rows<R>(arithmetic: A, rows: &[R]) -> Result<Self, SystemError>
    where
        R: AsRef<[A::ScalarType]>,
    {
        Self::new(Matrix::from_rows(arithmetic, rows)?)
    }

    /// create an equation system from integer rows, which are converted
    /// using the given arithmetic
    pub fn from_int_rows<R>(arithmetic: A, rows: &[R]) -> Result<Self, SystemError>
    where
        R: AsRef<[i64]>,
    {
        Self::new(Matrix::from_int_rows(arithmetic, rows)?)
    }

    /// the coefficient and solution matrix
    pub fn matrix(&self) -> &Matrix<A> {
        &self.matrix
    }

    /// the arithmetic of the underlying matrix
    pub fn arithmetic(&self) -> &A {
        self.matrix.arithmetic()
    }

    /// number of equations
    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }

    /// number of columns, including the solution column
    pub fn ncols(&self) -> usize {
        self.matrix.ncols()
    }

    /// number of unknowns, i.e. the number of coefficient columns
    pub fn unknown_count(&self) -> usize {
        self.ncols() - 1
    }

    /// index of the solution column
    pub fn solution_col(&self) -> usize {
        self.ncols() - 1
    }

    /// the entry at the given row and column
    pub fn entry(&self, row: usize, col: usize) -> &A::ScalarType {
        self.matrix.entry(row, col)
    }

    /// a copy of the given row, including the solution entry
    pub fn row(&self, row: usize) -> Vec<A::ScalarType> {
        self.matrix.row(row)
    }

    /// a copy of the right hand side
    pub fn solution_column(&self) -> Vec<A::ScalarType> {
        self.matrix.column(self.solution_col())
    }

    /// solve this system with Gauss elimination.
    ///
    /// Degenerate systems are not an error, they are reported as
    /// [`SolutionState::Unsolvable`](crate::solution::SolutionState::Unsolvable)
    /// or [`SolutionState::Infinite`](crate::solution::SolutionState::Infinite).
    /// Errors are only returned if the arithmetic cannot perform an operation.
    pub fn solve_with_gauss(&self) -> Result<Solution<A>, SolverError> {
        GaussSolver::new(self.clone()).solve()
    }

    /// see [`Matrix::with_entry`]
    pub fn with_entry(&self, row: usize, col: usize, value: A::ScalarType) -> Self {
        self.rewrap(self.matrix.with_entry(row, col, value))
    }

    /// see [`Matrix::swap_rows`]
    pub fn swap_rows(&self, row1: usize, row2: usize) -> Self {
        self.rewrap(self.matrix.swap_rows(row1, row2))
    }

    /// see [`Matrix::swap_cols`]
    pub fn swap_cols(&self, col1: usize, col2: usize) -> Self {
        self.rewrap(self.matrix.swap_cols(col1, col2))
    }

    /// see [`Matrix::multiply_row`]
    pub fn multiply_row(&self, row: usize, factor: &A::ScalarType) -> Result<Self, ArithmeticError> {
        Ok(self.rewrap(self.matrix.multiply_row(row, factor)?))
    }

    /// see [`Matrix::multiply_col`]
    pub fn multiply_col(&self, col: usize, factor: &A::ScalarType) -> Result<Self, ArithmeticError> {
        Ok(self.rewrap(self.matrix.multiply_col(col, factor)?))
    }

    /// see [`Matrix::add_row_multiple_times`]
    pub fn add_row_multiple_times(
        &self,
        target: usize,
        source: usize,
        factor: &A::ScalarType,
    ) -> Result<Self, ArithmeticError> {
        Ok(self.rewrap(self.matrix.add_row_multiple_times(target, source, factor)?))
    }

    /// see [`Matrix::add_col_multiple_times`]
    pub fn add_col_multiple_times(
        &self,
        target: usize,
        source: usize,
        factor: &A::ScalarType,
    ) -> Result<Self, ArithmeticError> {
        Ok(self.rewrap(self.matrix.add_col_multiple_times(target, source, factor)?))
    }

    // transforms preserve the dimensions, so the invariants of `new` still hold
    fn rewrap(&self, matrix: Matrix<A>) -> Self {
        Self { matrix }
    }
}

impl<A: Arithmetic> PartialEq for EquationSystem<A> {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}

impl<A> Eq for EquationSystem<A>
where
    A: Arithmetic,
    A::ScalarType: Eq,
{
}

impl<A> Hash for EquationSystem<A>
where
    A: Arithmetic,
    A::ScalarType: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.matrix.hash(state);
    }
}

impl<A> Display for EquationSystem<A>
where
    A: Arithmetic,
    A::ScalarType: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EquationSystem{}", self.matrix)
    }
}
