use super::*;
use crate::arithmetic::{CheckedFieldArithmetic, FloatArithmetic, IntegerArithmetic};
use crate::solution::SolutionState;
use assert_matches::assert_matches;
use num_rational::Ratio;
use std::collections::hash_map::DefaultHasher;

fn int_system(rows: &[&[i64]]) -> EquationSystem<IntegerArithmetic<i64>> {
    EquationSystem::from_int_rows(IntegerArithmetic::new(), rows).expect("valid system")
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn empty_systems_are_rejected_at_construction() {
    let no_rows: Vec<Vec<f64>> = Vec::new();
    assert_matches!(
        EquationSystem::from_rows(FloatArithmetic::<f64>::new(), &no_rows),
        Err(SystemError::EmptySystem { nrows: 0, ncols: 0 })
    );
    let no_cols: Vec<Vec<f64>> = vec![vec![], vec![]];
    assert_matches!(
        EquationSystem::from_rows(FloatArithmetic::<f64>::new(), &no_cols),
        Err(SystemError::EmptySystem { nrows: 2, ncols: 0 })
    );
}

#[test]
fn ragged_rows_are_rejected_at_construction() {
    let rows: Vec<Vec<i64>> = vec![vec![1, 2, 3], vec![4, 5]];
    assert_matches!(
        EquationSystem::from_int_rows(IntegerArithmetic::<i64>::new(), &rows),
        Err(SystemError::Matrix(MatrixError::RaggedRows { row: 1, .. }))
    );
}

#[test]
fn system_exposes_dimensions_and_solution_column() {
    let system = int_system(&[&[1, 2, 3], &[4, 5, 6]]);
    assert_eq!(system.nrows(), 2);
    assert_eq!(system.ncols(), 3);
    assert_eq!(system.unknown_count(), 2);
    assert_eq!(system.solution_col(), 2);
    assert_eq!(system.solution_column(), vec![3, 6]);
    assert_eq!(system.row(1), vec![4, 5, 6]);
    assert_eq!(*system.entry(0, 1), 2);
    assert_eq!(system.matrix().ncols(), 3);
}

#[test]
fn transforms_return_new_equation_systems() {
    let system = int_system(&[&[1, 2, 3], &[4, 5, 6]]);
    let original = system.clone();

    let transformed = system
        .swap_rows(0, 1)
        .add_row_multiple_times(1, 0, &-1)
        .unwrap()
        .multiply_row(0, &2)
        .unwrap();
    assert_eq!(transformed, int_system(&[&[8, 10, 12], &[-3, -3, -3]]));

    assert_eq!(
        system.swap_cols(0, 1),
        int_system(&[&[2, 1, 3], &[5, 4, 6]])
    );
    assert_eq!(
        system.multiply_col(0, &-1).unwrap(),
        int_system(&[&[-1, 2, 3], &[-4, 5, 6]])
    );
    assert_eq!(
        system.add_col_multiple_times(1, 0, &-2).unwrap(),
        int_system(&[&[1, 0, 3], &[4, -3, 6]])
    );
    assert_eq!(
        system.with_entry(1, 2, 0),
        int_system(&[&[1, 2, 3], &[4, 5, 0]])
    );
    assert_eq!(system, original);
}

#[test]
fn equality_hash_and_display_delegate_to_matrix() {
    let s1 = int_system(&[&[1, 2, 3], &[4, 5, 6]]);
    let s2 = EquationSystem::new(s1.matrix().clone()).unwrap();
    assert_eq!(s1, s2);
    assert_eq!(hash_of(&s1), hash_of(&s2));
    assert_ne!(s1, s1.swap_rows(0, 1));
    assert_eq!(s1.to_string(), "EquationSystem[[1, 2, 3], [4, 5, 6]]");
}

#[test]
fn solve_with_gauss_solves_the_system_itself() {
    let system =
        EquationSystem::from_int_rows(CheckedFieldArithmetic::<Ratio<i64>>::new(), &[[1, 2, 3], [4, 5, 6]])
            .unwrap();
    let solution = system.solve_with_gauss().unwrap();
    assert_eq!(solution.state(), SolutionState::Single);
    assert_eq!(solution.system(), &system);
    assert_eq!(
        solution.values().as_slice(),
        &[Ratio::from_integer(-1), Ratio::from_integer(2)]
    );
}
