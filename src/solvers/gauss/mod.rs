
use super::{LinearSolver, SolverCore, SolverError};
use crate::arithmetic::{Arithmetic, ArithmeticError};
use crate::solution::Solution;
use crate::system::EquationSystem;
use tracing::{debug, trace};

/// # Gauss Elimination
///
/// Solves a system of linear equations by row reduction and classifies the
/// result as a single solution, no solution or infinitely many solutions.
///
/// ## Algorithm
///
/// 1. Rows that are entirely zero are moved to the bottom.
/// 2. For every row `i`, starting at the top, the pivot `$a_{ii}$` is made
///    non-zero, normalized to one and all entries below it are eliminated.
///    A zero pivot is first replaced by swapping with a lower row that has a
///    non-zero entry in column `i`. Only if there is none, the columns are
///    swapped with a column to the right. Column swaps permute the unknowns,
///    so they are recorded and undone (last in, first out) before reporting.
///    The first non-zero candidate wins, no magnitude based pivoting is done.
/// 3. A row `0 = c` with `c != 0` makes the system unsolvable.
/// 4. Fewer equations than unknowns mean infinitely many solutions.
/// 5. Back substitution from the bottom up produces a diagonal matrix.
/// 6. Non-zero entries to the right of the diagonal, or zeros on it, are free
///    variables, which means infinitely many solutions. This is checked again
///    after undoing the column swaps and restoring the pivot order.
/// 7. Otherwise the solution column holds the unique solution.
///
/// The solver never mutates the original system. Each reduction step produces
/// a new working system. Degenerate systems are never errors. Errors only come
/// from the arithmetic.
#[derive(Debug, Clone)]
pub struct GaussSolver<A: Arithmetic> {
    core: SolverCore<A>,
    /// the column pairs that were swapped during the reduction, in order
    swapped_cols: Vec<(usize, usize)>,
}

impl<A: Arithmetic> GaussSolver<A> {
    /// create a solver for the given system
    pub fn new(system: EquationSystem<A>) -> Self {
        Self {
            core: SolverCore::new(system),
            swapped_cols: Vec::new(),
        }
    }

    /// the arithmetic of the system
    pub fn arithmetic(&self) -> &A {
        self.core.arithmetic()
    }

    /// set the working system to the original system and forget all column swaps
    pub fn reset(&mut self) {
        self.core.reset();
        self.swapped_cols.clear();
    }

    /// the current working system. Only available during a reduction, i.e.
    /// fails with [`SolverError::InvalidState`] if called before [`reset`](GaussSolver::reset).
    pub fn working(&self) -> Result<&EquationSystem<A>, SolverError> {
        self.core.working()
    }

    fn reduce(&mut self) -> Result<Solution<A>, SolverError> {
        self.prepare()?;

        if self.has_contradiction()? {
            return Ok(Solution::unsolvable(self.core.system().clone()));
        }

        let (nrows, unknowns) = self.dimensions()?;
        if nrows < unknowns {
            trace!(nrows, unknowns, "fewer equations than unknowns");
            return Ok(Solution::infinite(self.core.system().clone()));
        }

        self.solve_bottom_up()?;
        if self.has_free_variables()? {
            return Ok(Solution::infinite(self.core.system().clone()));
        }

        if !self.swapped_cols.is_empty() {
            self.undo_column_swaps()?;
            self.restore_pivot_order()?;
            if self.has_free_variables()? {
                return Ok(Solution::infinite(self.core.system().clone()));
            }
        }

        self.core.to_solved_solution()
    }

    /// number of rows and number of unknowns of the working system
    fn dimensions(&self) -> Result<(usize, usize), SolverError> {
        let working = self.core.working()?;
        Ok((working.nrows(), working.unknown_count()))
    }

    fn is_zero_at(&self, row: usize, col: usize) -> Result<bool, SolverError> {
        let working = self.core.working()?;
        Ok(self.core.arithmetic().is_zero(working.entry(row, col)))
    }

    fn entry(&self, row: usize, col: usize) -> Result<A::ScalarType, SolverError> {
        Ok(self.core.working()?.entry(row, col).clone())
    }

    /// replace the working system by the result of the given step
    fn apply<F>(&mut self, step: F) -> Result<(), SolverError>
    where
        F: FnOnce(&EquationSystem<A>) -> Result<EquationSystem<A>, ArithmeticError>,
    {
        let next = step(self.core.working()?)?;
        self.core.replace_working(next)
    }

    fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<(), SolverError> {
        trace!(row1, row2, "swapping rows");
        self.apply(|working| Ok(working.swap_rows(row1, row2)))
    }

    fn swap_cols(&mut self, col1: usize, col2: usize) -> Result<(), SolverError> {
        trace!(col1, col2, "swapping columns");
        self.apply(|working| Ok(working.swap_cols(col1, col2)))
    }

    /// bring the working system into upper triangular form with ones on the
    /// diagonal, as far as the pivots allow
    fn prepare(&mut self) -> Result<(), SolverError> {
        self.bubble_zero_rows_down(0)?;
        let (nrows, unknowns) = self.dimensions()?;
        for i in 0..nrows.min(unknowns) {
            if self.core.all_zero(i)? {
                break;
            }
            if !self.swap_to_nonzero_pivot(i)? {
                // 0 = c, nothing left to pivot on
                break;
            }
            self.normalize_pivot(i)?;
            self.clear_below(i)?;
            self.bubble_zero_rows_down(i + 1)?;
        }
        Ok(())
    }

    /// move all rows that are entirely zero below the non-zero rows, starting
    /// at the given row. The order of the non-zero rows is preserved.
    fn bubble_zero_rows_down(&mut self, from: usize) -> Result<(), SolverError> {
        let (nrows, _) = self.dimensions()?;
        for i in from..nrows.saturating_sub(1) {
            if !self.core.all_zero(i)? {
                continue;
            }
            for j in i + 1..nrows {
                if !self.core.all_zero(j)? {
                    self.swap_rows(i, j)?;
                    break;
                }
            }
        }
        Ok(())
    }

    /// Make sure the pivot at `(i, i)` is not zero. Returns false if no
    /// swap can produce a non-zero pivot, which happens if all coefficients of
    /// the row are zero.
    fn swap_to_nonzero_pivot(&mut self, i: usize) -> Result<bool, SolverError> {
        if !self.is_zero_at(i, i)? {
            return Ok(true);
        }
        let (nrows, unknowns) = self.dimensions()?;
        for row in i + 1..nrows {
            if !self.is_zero_at(row, i)? {
                self.swap_rows(i, row)?;
                return Ok(true);
            }
        }
        if self.core.all_zero_ignoring_solution(i)? {
            return Ok(false);
        }
        // the solution column is never a candidate
        for col in i + 1..unknowns {
            if !self.is_zero_at(i, col)? {
                self.swap_cols(i, col)?;
                self.swapped_cols.push((i, col));
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// scale row `i` so that the pivot becomes one
    fn normalize_pivot(&mut self, i: usize) -> Result<(), SolverError> {
        let arith = self.core.arithmetic().clone();
        let pivot = self.entry(i, i)?;
        if arith.is_one(&pivot) {
            return Ok(());
        }
        let factor = arith.quotient(&arith.one(), &pivot)?;
        trace!(row = i, "normalizing pivot");
        self.apply(|working| working.multiply_row(i, &factor))?;
        let normalized = self.entry(i, i)?;
        if arith.is_one(&normalized) {
            return Ok(());
        }
        // a vanishing pivot means the quotient was no inverse at all
        if arith.is_zero(&normalized) {
            return Err(ArithmeticError::unsupported(
                "quotient",
                format!("{:?} has no multiplicative inverse", pivot),
            )
            .into());
        }
        // rounding, e.g. for floating point types
        let one = arith.one();
        self.apply(|working| Ok(working.with_entry(i, i, one)))
    }

    /// eliminate column `i` in every row below the (normalized) pivot `(i, i)`
    fn clear_below(&mut self, i: usize) -> Result<(), SolverError> {
        let (nrows, _) = self.dimensions()?;
        for row in i + 1..nrows {
            self.eliminate(row, i)?;
        }
        Ok(())
    }

    /// add a multiple of the pivot row `pivot` to `row` so that the entry of
    /// `row` in the pivot column vanishes
    fn eliminate(&mut self, row: usize, pivot: usize) -> Result<(), SolverError> {
        if self.is_zero_at(row, pivot)? {
            return Ok(());
        }
        let factor = self.core.arithmetic().negate(&self.entry(row, pivot)?)?;
        trace!(row, pivot, "eliminating entry");
        self.apply(|working| working.add_row_multiple_times(row, pivot, &factor))
    }

    /// whether any row reads `0 = c` with `c != 0`
    fn has_contradiction(&self) -> Result<bool, SolverError> {
        let (nrows, _) = self.dimensions()?;
        for row in 0..nrows {
            if self.core.all_zero_ignoring_solution(row)? && !self.core.all_zero(row)? {
                trace!(row, "row contradicts the system");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// eliminate the entries above the pivots, starting at the last row
    fn solve_bottom_up(&mut self) -> Result<(), SolverError> {
        let (nrows, unknowns) = self.dimensions()?;
        for i in (0..nrows.min(unknowns)).rev() {
            if self.core.all_zero(i)? || self.is_zero_at(i, i)? {
                continue;
            }
            for row in 0..i {
                self.eliminate(row, i)?;
            }
        }
        Ok(())
    }

    /// whether the coefficient block of the working system leaves any unknown
    /// undetermined, i.e. it has a zero on the diagonal or a non-zero entry to
    /// the right of it
    fn has_free_variables(&self) -> Result<bool, SolverError> {
        let (nrows, unknowns) = self.dimensions()?;
        for i in 0..unknowns {
            if i >= nrows || self.is_zero_at(i, i)? {
                trace!(unknown = i, "unknown has no pivot");
                return Ok(true);
            }
            for col in i + 1..unknowns {
                if !self.is_zero_at(i, col)? {
                    trace!(row = i, col, "free variable remains");
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn undo_column_swaps(&mut self) -> Result<(), SolverError> {
        while let Some((col1, col2)) = self.swapped_cols.pop() {
            self.swap_cols(col1, col2)?;
        }
        Ok(())
    }

    /// swap rows until every row `i` has a non-zero entry in column `i`
    fn restore_pivot_order(&mut self) -> Result<(), SolverError> {
        let (nrows, unknowns) = self.dimensions()?;
        for i in 0..nrows.min(unknowns) {
            if !self.is_zero_at(i, i)? {
                continue;
            }
            for row in i + 1..nrows {
                if !self.is_zero_at(row, i)? {
                    self.swap_rows(i, row)?;
                    break;
                }
            }
        }
        Ok(())
    }
}

impl<A: Arithmetic> LinearSolver for GaussSolver<A> {
    type Arithmetic = A;

    fn system(&self) -> &EquationSystem<A> {
        self.core.system()
    }

    fn solve(&mut self) -> Result<Solution<A>, SolverError> {
        self.reset();
        let result = self.reduce();
        self.core.discard_working();
        self.swapped_cols.clear();
        match &result {
            Ok(solution) => debug!(state = %solution.state(), "gauss elimination finished"),
            Err(err) => debug!(error = %err, "gauss elimination failed"),
        }
        result
    }
}
