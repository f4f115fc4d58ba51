
/// Gauss elimination
pub mod gauss;

use crate::arithmetic::{Arithmetic, ArithmeticError};
use crate::solution::Solution;
use crate::system::EquationSystem;
use nalgebra::DVector;
use thiserror::Error as ThisError;

/// Errors that occur while solving an equation system. Note that systems
/// without a (unique) solution are not errors.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SolverError {
    /// The working state of the solver was accessed before it was reset
    #[error("Solver state accessed before reset. Call reset() before using the working system.")]
    InvalidState,
    /// The arithmetic could not perform an operation during the reduction
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// A solver for a system of linear equations.
///
/// Solving borrows the solver mutably, because the solver keeps its working
/// state while it runs. Solvers for independent systems can run on different
/// threads, a single solver must not be shared without synchronization.
pub trait LinearSolver {
    /// the arithmetic of the systems this solver can solve
    type Arithmetic: Arithmetic;

    /// the original system that this solver solves
    fn system(&self) -> &EquationSystem<Self::Arithmetic>;

    /// Solve the system and classify the result. Calling this repeatedly
    /// produces equal solutions.
    fn solve(&mut self) -> Result<Solution<Self::Arithmetic>, SolverError>;
}

/// The state and helper functionality shared by all solvers.
///
/// This holds the immutable original system and a replaceable *working*
/// system which the reduction steps operate on. The working system only
/// exists between a call to [`SolverCore::reset`] and
/// [`SolverCore::discard_working`]. All methods that read the working system
/// fail with [`SolverError::InvalidState`] outside of that window.
#[derive(Debug, Clone)]
pub struct SolverCore<A: Arithmetic> {
    system: EquationSystem<A>,
    working: Option<EquationSystem<A>>,
}

impl<A: Arithmetic> SolverCore<A> {
    /// create the state for solving the given system. The working system is
    /// not initialized yet.
    pub fn new(system: EquationSystem<A>) -> Self {
        Self {
            system,
            working: None,
        }
    }

    /// the original system
    pub fn system(&self) -> &EquationSystem<A> {
        &self.system
    }

    /// the arithmetic of the original system
    pub fn arithmetic(&self) -> &A {
        self.system.arithmetic()
    }

    /// set the working system to a copy of the original system
    pub fn reset(&mut self) {
        self.working = Some(self.system.clone());
    }

    /// drop the working system. Accessing it afterwards is an error until the
    /// next [`reset`](SolverCore::reset).
    pub fn discard_working(&mut self) {
        self.working = None;
    }

    /// the current working system
    pub fn working(&self) -> Result<&EquationSystem<A>, SolverError> {
        self.working.as_ref().ok_or(SolverError::InvalidState)
    }

    /// replace the working system with the result of a reduction step
    pub fn replace_working(&mut self, system: EquationSystem<A>) -> Result<(), SolverError> {
        let working = self.working.as_mut().ok_or(SolverError::InvalidState)?;
        *working = system;
        Ok(())
    }

    /// whether every entry of the given row of the working system is zero
    pub fn all_zero(&self, row: usize) -> Result<bool, SolverError> {
        let working = self.working()?;
        Ok(self.all_zero_up_to(working, row, working.ncols()))
    }

    /// whether every entry of the given row of the working system is zero,
    /// not taking the solution column into account
    pub fn all_zero_ignoring_solution(&self, row: usize) -> Result<bool, SolverError> {
        let working = self.working()?;
        Ok(self.all_zero_up_to(working, row, working.solution_col()))
    }

    fn all_zero_up_to(&self, working: &EquationSystem<A>, row: usize, ncols: usize) -> bool {
        let arith = self.arithmetic();
        (0..ncols).all(|col| arith.is_zero(working.entry(row, col)))
    }

    /// Build a [`SolutionState::Single`](crate::solution::SolutionState::Single)
    /// solution from the solution column of the working system. This assumes
    /// that the reduction has produced an identity coefficient block in the
    /// first `unknown_count` rows, so that row `i` holds the value of unknown `i`.
    pub fn to_solved_solution(&self) -> Result<Solution<A>, SolverError> {
        let working = self.working()?;
        let solution_col = working.solution_col();
        let values = DVector::from_iterator(
            working.unknown_count(),
            (0..working.unknown_count()).map(|row| working.entry(row, solution_col).clone()),
        );
        Ok(Solution::single(self.system.clone(), values))
    }
}
