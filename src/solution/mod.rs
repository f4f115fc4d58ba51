
use crate::arithmetic::{Arithmetic, ArithmeticError};
use crate::system::EquationSystem;
use nalgebra::DVector;
use std::fmt::{Display, Formatter};

/// The classification of the solution set of an equation system
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SolutionState {
    /// exactly one solution exists
    Single,
    /// no solution exists, the equations contradict each other
    Unsolvable,
    /// infinitely many solutions exist, i.e. there are free variables
    Infinite,
}

impl Display for SolutionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SolutionState::Single => "SINGLE",
            SolutionState::Unsolvable => "UNSOLVABLE",
            SolutionState::Infinite => "INFINITE",
        };
        write!(f, "{}", name)
    }
}

/// The classified result of solving an equation system.
///
/// The solution refers to the *original* equation system that was solved,
/// not to the reduced form the solver arrived at, so that the values can be
/// checked against the original coefficients (see [`Solution::verify`]).
#[derive(Debug, Clone)]
pub struct Solution<A: Arithmetic> {
    system: EquationSystem<A>,
    values: DVector<A::ScalarType>,
    state: SolutionState,
}

impl<A: Arithmetic> Solution<A> {
    /// A unique solution. The values are ordered by the index of the unknown,
    /// i.e. by coefficient column.
    /// # Panics
    /// if the number of values does not match the number of unknowns of the system
    pub fn single(system: EquationSystem<A>, values: DVector<A::ScalarType>) -> Self {
        assert_eq!(
            values.len(),
            system.unknown_count(),
            "A single solution must contain exactly one value per unknown."
        );
        Self {
            system,
            values,
            state: SolutionState::Single,
        }
    }

    /// the system has no solution
    pub fn unsolvable(system: EquationSystem<A>) -> Self {
        Self::without_values(system, SolutionState::Unsolvable)
    }

    /// the system has infinitely many solutions
    pub fn infinite(system: EquationSystem<A>) -> Self {
        Self::without_values(system, SolutionState::Infinite)
    }

    fn without_values(system: EquationSystem<A>, state: SolutionState) -> Self {
        Self {
            system,
            values: DVector::from_vec(Vec::new()),
            state,
        }
    }

    /// the original equation system
    pub fn system(&self) -> &EquationSystem<A> {
        &self.system
    }

    /// the values of the unknowns. Empty unless the state is [`SolutionState::Single`].
    pub fn values(&self) -> &DVector<A::ScalarType> {
        &self.values
    }

    /// the values of the unknowns if there is a unique solution
    pub fn into_values(self) -> Option<DVector<A::ScalarType>> {
        match self.state {
            SolutionState::Single => Some(self.values),
            _ => None,
        }
    }

    /// the classification of the solution
    pub fn state(&self) -> SolutionState {
        self.state
    }

    /// whether there is exactly one solution
    pub fn is_single(&self) -> bool {
        self.state == SolutionState::Single
    }

    /// whether there is no solution
    pub fn is_unsolvable(&self) -> bool {
        self.state == SolutionState::Unsolvable
    }

    /// whether there are infinitely many solutions
    pub fn is_infinite(&self) -> bool {
        self.state == SolutionState::Infinite
    }

    /// Substitute the values into every equation of the original system and
    /// check that each reproduces its right hand side. The comparison uses
    /// [`Arithmetic::is_zero`] on the difference, so it honors the tolerance
    /// of the arithmetic.
    ///
    /// Returns `false` for solutions that are not [`SolutionState::Single`].
    pub fn verify(&self) -> Result<bool, ArithmeticError> {
        if !self.is_single() {
            return Ok(false);
        }
        let arith = self.system.arithmetic();
        for row in 0..self.system.nrows() {
            let mut lhs = arith.zero();
            for (col, value) in self.values.iter().enumerate() {
                let summand = arith.product(self.system.entry(row, col), value)?;
                lhs = arith.sum(&lhs, &summand)?;
            }
            let rhs = self.system.entry(row, self.system.solution_col());
            if !arith.is_zero(&arith.difference(&lhs, rhs)?) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<A: Arithmetic> PartialEq for Solution<A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.values == other.values && self.system == other.system
    }
}

impl<A> Display for Solution<A>
where
    A: Arithmetic,
    A::ScalarType: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.state)?;
        if self.is_single() {
            write!(f, "(")?;
            for (idx, value) in self.values.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
