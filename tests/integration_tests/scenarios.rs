use approx::assert_relative_eq;
use assert_matches::assert_matches;
use linsys::prelude::*;
use num_complex::Complex;
use shared_test_code::{rational_system, Rational};

#[test]
fn proportional_looking_two_by_two_system_has_unique_solution() {
    // x + 2y = 3, 4x + 5y = 6
    let system = rational_system(&[[1, 2, 3], [4, 5, 6]]);
    let solution = system.solve_with_gauss().expect("solving must not fail");
    assert_eq!(solution.state(), SolutionState::Single);
    assert_eq!(
        solution.values().as_slice(),
        &[Rational::from_integer(-1), Rational::from_integer(2)]
    );
    assert_eq!(solution.system(), &system);
    assert!(solution.verify().unwrap());
}

#[test]
fn zero_coefficients_with_nonzero_right_hand_side_are_unsolvable() {
    let solution = rational_system(&[[0, 0, 5]]).solve_with_gauss().unwrap();
    assert_eq!(solution.state(), SolutionState::Unsolvable);
    assert!(solution.values().is_empty());
}

#[test]
fn dependent_rows_are_infinite() {
    let solution = rational_system(&[[1, 1, 2], [2, 2, 4]])
        .solve_with_gauss()
        .unwrap();
    assert_eq!(solution.state(), SolutionState::Infinite);
}

#[test]
fn zero_pivot_system_is_solved_in_original_variable_order() {
    // y = 1, x = 1
    let solution = rational_system(&[[0, 1, 1], [1, 0, 1]])
        .solve_with_gauss()
        .unwrap();
    assert_eq!(solution.state(), SolutionState::Single);
    assert_eq!(
        solution.values().as_slice(),
        &[Rational::from_integer(1), Rational::from_integer(1)]
    );

    // y = 2, x = 3: the unknowns must not be reported in row order
    let solution = rational_system(&[[0, 1, 2], [1, 0, 3]])
        .solve_with_gauss()
        .unwrap();
    assert_eq!(
        solution.values().as_slice(),
        &[Rational::from_integer(3), Rational::from_integer(2)]
    );
}

#[test]
fn systems_that_require_column_swaps_are_classified_correctly() {
    // the first unknown does not occur in any equation
    let solution = rational_system(&[[0, 1, 1], [0, 2, 2]])
        .solve_with_gauss()
        .unwrap();
    assert_eq!(solution.state(), SolutionState::Infinite);

    let solution = rational_system(&[[0, 1, 1], [0, 1, 2]])
        .solve_with_gauss()
        .unwrap();
    assert_eq!(solution.state(), SolutionState::Unsolvable);

    let solution = rational_system(&[[0, 1, 0, 1], [0, 0, 1, 2], [0, 1, 1, 3]])
        .solve_with_gauss()
        .unwrap();
    assert_eq!(solution.state(), SolutionState::Infinite);
}

#[test]
fn complex_system_is_solved_exactly() {
    let i = Complex::new(0., 1.);
    let one = Complex::new(1., 0.);
    // x + iy = 1 + i, ix + y = 1 + i
    let system = EquationSystem::from_rows(
        FieldArithmetic::<Complex<f64>>::new(),
        &[[one, i, one + i], [i, one, one + i]],
    )
    .unwrap();
    let solution = system.solve_with_gauss().unwrap();
    assert_eq!(solution.state(), SolutionState::Single);
    assert_eq!(solution.values().as_slice(), &[one, one]);

    // (1 + i)x = 2i
    let system =
        EquationSystem::from_rows(FieldArithmetic::<Complex<f64>>::new(), &[[one + i, 2. * i]])
            .unwrap();
    let solution = system.solve_with_gauss().unwrap();
    assert_eq!(solution.values()[0], one + i);
}

#[test]
fn float_system_solution_reproduces_right_hand_side() {
    let system = EquationSystem::from_rows(
        FloatArithmetic::with_tolerance(1e-12),
        &[
            [0.5, -1.25, 3., 7.],
            [2., 0., -1., 0.5],
            [0., 4., 0.125, -2.],
        ],
    )
    .unwrap();
    let solution = GaussSolver::new(system.clone()).solve().unwrap();
    assert_eq!(solution.state(), SolutionState::Single);
    for row in 0..system.nrows() {
        let lhs: f64 = (0..system.unknown_count())
            .map(|col| system.entry(row, col) * solution.values()[col])
            .sum();
        assert_relative_eq!(lhs, *system.entry(row, 3), epsilon = 1e-10);
    }
}

#[test]
fn integer_arithmetic_failure_reaches_the_caller() {
    let system =
        EquationSystem::from_int_rows(IntegerArithmetic::<i64>::new(), &[[1, 2, 3], [4, 5, 6]])
            .unwrap();
    // the second pivot is -3, which has no integer inverse
    assert_matches!(
        system.solve_with_gauss(),
        Err(SolverError::Arithmetic(ArithmeticError::UnsupportedOperation { .. }))
    );
}

#[test]
fn rational_overflow_is_reported_instead_of_a_wrong_solution() {
    let big = i64::MAX / 3;
    let result = rational_system(&[[big, 1, 1], [1, big - 1, 2]]).solve_with_gauss();
    assert_matches!(
        result,
        Err(SolverError::Arithmetic(ArithmeticError::UnsupportedOperation { .. }))
    );
}
