#![warn(missing_docs)]
//! a helper crate which carries common code used by the benchmarks and the
//! integration tests.
use linsys::prelude::*;
use nalgebra::DMatrix;
use num_rational::Ratio;
use rand::seq::SliceRandom;
use rand::Rng;

/// exact rational numbers used throughout the tests
pub type Rational = Ratio<i64>;

/// a system of equations given as integer rows, together with the one solution
/// it is known to have
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownSolutionSystem {
    /// the rows of the coefficient and solution matrix
    pub rows: Vec<Vec<i64>>,
    /// the values of the unknowns that solve the system
    pub solution: Vec<i64>,
}

impl KnownSolutionSystem {
    /// the number of unknowns
    pub fn size(&self) -> usize {
        self.solution.len()
    }

    /// the system with exact rational arithmetic
    pub fn rational_system(&self) -> EquationSystem<CheckedFieldArithmetic<Rational>> {
        rational_system(&self.rows)
    }

    /// the system with floating point arithmetic
    pub fn float_system(&self) -> EquationSystem<FloatArithmetic<f64>> {
        let rows: Vec<Vec<f64>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|v| *v as f64).collect())
            .collect();
        EquationSystem::from_rows(FloatArithmetic::new(), &rows)
            .expect("known solution systems have equal row lengths")
    }

    /// the known solution as rationals
    pub fn rational_solution(&self) -> Vec<Rational> {
        self.solution.iter().copied().map(Rational::from_integer).collect()
    }
}

/// build an exact rational equation system from integer rows
pub fn rational_system<R: AsRef<[i64]>>(rows: &[R]) -> EquationSystem<CheckedFieldArithmetic<Rational>> {
    EquationSystem::from_int_rows(CheckedFieldArithmetic::new(), rows)
        .expect("integer rows must form a valid equation system")
}

/// Create a random square integer matrix with determinant `$\pm 1$`. It is the
/// product of a unit lower and a unit upper triangular matrix with entries in
/// `[-max_entry, max_entry]`, with randomly permuted rows. The row permutation
/// makes sure that the solvers also have to deal with zero pivots.
pub fn random_unimodular_matrix<R: Rng>(rng: &mut R, size: usize, max_entry: i64) -> DMatrix<i64> {
    let mut random_triangular = |lower: bool| {
        DMatrix::from_fn(size, size, |i, j| {
            if i == j {
                1
            } else if (i > j) == lower {
                rng.gen_range(-max_entry..=max_entry)
            } else {
                0
            }
        })
    };
    let l = random_triangular(true);
    let u = random_triangular(false);
    let lu = l * u;

    let mut permutation: Vec<usize> = (0..size).collect();
    permutation.shuffle(rng);
    DMatrix::from_fn(size, size, |i, j| lu[(permutation[i], j)])
}

/// Create a uniquely solvable system with `size` unknowns and a random integer
/// solution with entries in `[-max_entry, max_entry]`.
pub fn random_system_with_known_solution<R: Rng>(
    rng: &mut R,
    size: usize,
    max_entry: i64,
) -> KnownSolutionSystem {
    let coefficients = random_unimodular_matrix(rng, size, max_entry);
    let solution: Vec<i64> = (0..size)
        .map(|_| rng.gen_range(-max_entry..=max_entry))
        .collect();
    let rows = (0..size)
        .map(|i| {
            let mut row: Vec<i64> = coefficients.row(i).iter().copied().collect();
            let rhs: i64 = row.iter().zip(solution.iter()).map(|(a, x)| a * x).sum();
            row.push(rhs);
            row
        })
        .collect();
    KnownSolutionSystem { rows, solution }
}
