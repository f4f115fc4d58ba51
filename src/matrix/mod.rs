
use crate::arithmetic::{Arithmetic, ArithmeticError};
use nalgebra::DMatrix;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use thiserror::Error as ThisError;

/// Errors that occur when constructing a matrix
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum MatrixError {
    /// The given rows do not all have the same length
    #[error(
        "Row {} has length {}, but expected length {} (the length of the first row).",
        row,
        found,
        expected
    )]
    RaggedRows {
        /// the index of the first row with a deviating length
        row: usize,
        /// the length of the first row
        expected: usize,
        /// the length of the offending row
        found: usize,
    },
    /// Converting an entry into the number type failed
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// A dense matrix whose entries are manipulated through an [`Arithmetic`].
///
/// The matrix is a value type: all transformations borrow the receiver and
/// return a new matrix, the receiver is never mutated. Equality and hashing
/// only consider the entries, not the arithmetic.
///
/// The storage is an [`nalgebra::DMatrix`], which can be accessed read-only
/// via [`Matrix::as_dmatrix`].
#[derive(Debug, Clone)]
pub struct Matrix<A: Arithmetic> {
    data: DMatrix<A::ScalarType>,
    arithmetic: A,
}

impl<A: Arithmetic> Matrix<A> {
    /// wrap an existing nalgebra matrix
    pub fn from_dmatrix(arithmetic: A, data: DMatrix<A::ScalarType>) -> Self {
        Self { data, arithmetic }
    }

    /// create a matrix from a list of rows. All rows must have the same length.
    pub fn from_rows<R>(arithmetic: A, rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[A::ScalarType]>,
    {
        let ncols = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if let Some((row, found)) = rows
            .iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|(_, len)| *len != ncols)
        {
            return Err(MatrixError::RaggedRows {
                row,
                expected: ncols,
                found,
            });
        }
        let data = DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i].as_ref()[j].clone());
        Ok(Self::from_dmatrix(arithmetic, data))
    }

    /// create a matrix from a list of integer rows, which are converted using
    /// [`Arithmetic::from_int`]. All rows must have the same length.
    pub fn from_int_rows<R>(arithmetic: A, rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[i64]>,
    {
        let converted = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|value| arithmetic.from_int(*value))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(arithmetic, &converted)
    }

    /// the arithmetic used for calculations with the entries
    pub fn arithmetic(&self) -> &A {
        &self.arithmetic
    }

    /// read-only access to the underlying storage
    pub fn as_dmatrix(&self) -> &DMatrix<A::ScalarType> {
        &self.data
    }

    /// number of rows
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// number of columns
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// the entry at the given row and column
    /// # Panics
    /// if the indices are out of bounds
    pub fn entry(&self, row: usize, col: usize) -> &A::ScalarType {
        &self.data[(row, col)]
    }

    /// a copy of the row with the given index, ordered by column
    /// # Panics
    /// if the index is out of bounds
    pub fn row(&self, row: usize) -> Vec<A::ScalarType> {
        self.assert_row(row);
        self.data.row(row).iter().cloned().collect()
    }

    /// a copy of the column with the given index, ordered by row
    /// # Panics
    /// if the index is out of bounds
    pub fn column(&self, col: usize) -> Vec<A::ScalarType> {
        self.assert_col(col);
        self.data.column(col).iter().cloned().collect()
    }

    /// a copy of this matrix where the entry at the given position is replaced
    /// # Panics
    /// if the indices are out of bounds
    pub fn with_entry(&self, row: usize, col: usize, value: A::ScalarType) -> Self {
        self.assert_row(row);
        self.assert_col(col);
        let mut data = self.data.clone();
        data[(row, col)] = value;
        self.rewrap(data)
    }

    /// the transposed matrix
    pub fn transpose(&self) -> Self {
        self.rewrap(self.data.transpose())
    }

    /// a copy of this matrix with rows `row1` and `row2` swapped
    /// # Panics
    /// if the indices are out of bounds
    pub fn swap_rows(&self, row1: usize, row2: usize) -> Self {
        self.assert_row(row1);
        self.assert_row(row2);
        let mut data = self.data.clone();
        data.swap_rows(row1, row2);
        self.rewrap(data)
    }

    /// a copy of this matrix with columns `col1` and `col2` swapped
    /// # Panics
    /// if the indices are out of bounds
    pub fn swap_cols(&self, col1: usize, col2: usize) -> Self {
        self.assert_col(col1);
        self.assert_col(col2);
        let mut data = self.data.clone();
        data.swap_columns(col1, col2);
        self.rewrap(data)
    }

    /// a copy of this matrix where every entry in the given row is multiplied
    /// by `factor`.
    /// # Panics
    /// if the index is out of bounds
    pub fn multiply_row(&self, row: usize, factor: &A::ScalarType) -> Result<Self, ArithmeticError> {
        self.assert_row(row);
        let mut data = self.data.clone();
        for col in 0..self.ncols() {
            data[(row, col)] = self.arithmetic.product(&self.data[(row, col)], factor)?;
        }
        Ok(self.rewrap(data))
    }

    /// a copy of this matrix where every entry in the given column is multiplied
    /// by `factor`.
    /// # Panics
    /// if the index is out of bounds
    pub fn multiply_col(&self, col: usize, factor: &A::ScalarType) -> Result<Self, ArithmeticError> {
        self.assert_col(col);
        let mut data = self.data.clone();
        for row in 0..self.nrows() {
            data[(row, col)] = self.arithmetic.product(&self.data[(row, col)], factor)?;
        }
        Ok(self.rewrap(data))
    }

    /// a copy of this matrix where `factor` times row `source` was added to
    /// row `target`.
    /// # Panics
    /// if the indices are out of bounds
    pub fn add_row_multiple_times(
        &self,
        target: usize,
        source: usize,
        factor: &A::ScalarType,
    ) -> Result<Self, ArithmeticError> {
        self.assert_row(target);
        self.assert_row(source);
        let mut data = self.data.clone();
        for col in 0..self.ncols() {
            let summand = self.arithmetic.product(factor, &self.data[(source, col)])?;
            data[(target, col)] = self.arithmetic.sum(&self.data[(target, col)], &summand)?;
        }
        Ok(self.rewrap(data))
    }

    /// a copy of this matrix where `factor` times column `source` was added to
    /// column `target`.
    /// # Panics
    /// if the indices are out of bounds
    pub fn add_col_multiple_times(
        &self,
        target: usize,
        source: usize,
        factor: &A::ScalarType,
    ) -> Result<Self, ArithmeticError> {
        self.assert_col(target);
        self.assert_col(source);
        let mut data = self.data.clone();
        for row in 0..self.nrows() {
            let summand = self.arithmetic.product(factor, &self.data[(row, source)])?;
            data[(row, target)] = self.arithmetic.sum(&self.data[(row, target)], &summand)?;
        }
        Ok(self.rewrap(data))
    }

    fn rewrap(&self, data: DMatrix<A::ScalarType>) -> Self {
        Self::from_dmatrix(self.arithmetic.clone(), data)
    }

    fn assert_row(&self, row: usize) {
        assert!(
            row < self.nrows(),
            "Row index {} out of bounds for matrix with {} rows.",
            row,
            self.nrows()
        );
    }

    fn assert_col(&self, col: usize) {
        assert!(
            col < self.ncols(),
            "Column index {} out of bounds for matrix with {} columns.",
            col,
            self.ncols()
        );
    }
}

impl<A: Arithmetic> PartialEq for Matrix<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A> Eq for Matrix<A>
where
    A: Arithmetic,
    A::ScalarType: Eq,
{
}

impl<A> Hash for Matrix<A>
where
    A: Arithmetic,
    A::ScalarType: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

/// renders the matrix row by row as `[[a, b], [c, d]]`
impl<A> Display for Matrix<A>
where
    A: Arithmetic,
    A::ScalarType: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (row_idx, row) in self.data.row_iter().enumerate() {
            if row_idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (col_idx, value) in row.iter().enumerate() {
                if col_idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
