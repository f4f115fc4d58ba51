pub use crate::arithmetic::{
    Arithmetic, ArithmeticError, CheckedFieldArithmetic, Field, FieldArithmetic, FloatArithmetic,
    IntegerArithmetic,
};
pub use crate::matrix::Matrix;
pub use crate::solution::{Solution, SolutionState};
pub use crate::solvers::gauss::GaussSolver;
pub use crate::solvers::{LinearSolver, SolverError};
pub use crate::system::EquationSystem;
