use approx::assert_relative_eq;
use linsys::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_test_code::{random_system_with_known_solution, rational_system, KnownSolutionSystem};

const SEED: u64 = 0x5eed;

fn random_systems(size: usize, count: usize) -> Vec<KnownSolutionSystem> {
    let mut rng = StdRng::seed_from_u64(SEED + size as u64);
    (0..count)
        .map(|_| random_system_with_known_solution(&mut rng, size, 3))
        .collect()
}

#[test]
fn uniquely_solvable_systems_reproduce_the_known_solution() {
    for size in 1..=6 {
        for known in random_systems(size, 20) {
            let solution = known
                .rational_system()
                .solve_with_gauss()
                .expect("rational arithmetic must not fail");
            assert_eq!(
                solution.state(),
                SolutionState::Single,
                "system {:?} must have a single solution",
                known.rows
            );
            assert_eq!(solution.values().as_slice(), known.rational_solution().as_slice());
            assert!(solution.verify().unwrap());
        }
    }
}

#[test]
fn uniquely_solvable_systems_are_solved_with_floats() {
    for size in 1..=6 {
        for known in random_systems(size, 20) {
            let solution = known.float_system().solve_with_gauss().unwrap();
            assert_eq!(solution.state(), SolutionState::Single);
            for (value, expected) in solution.values().iter().zip(known.solution.iter()) {
                assert_relative_eq!(*value, *expected as f64, epsilon = 1e-8);
            }
        }
    }
}

#[test]
fn appending_a_contradiction_makes_systems_unsolvable() {
    for size in 1..=5 {
        for known in random_systems(size, 10) {
            let mut rows = known.rows.clone();
            let mut contradiction = vec![0; size];
            contradiction.push(1);
            rows.insert(size / 2, contradiction);
            let solution = rational_system(&rows).solve_with_gauss().unwrap();
            assert_eq!(solution.state(), SolutionState::Unsolvable);
        }
    }
}

#[test]
fn fewer_equations_than_unknowns_are_infinite() {
    for size in 2..=6 {
        for known in random_systems(size, 10) {
            let rows = &known.rows[..size - 1];
            let solution = rational_system(rows).solve_with_gauss().unwrap();
            assert_eq!(solution.state(), SolutionState::Infinite);
        }
    }
}

#[test]
fn duplicated_equations_leave_free_variables() {
    for size in 2..=6 {
        for known in random_systems(size, 10) {
            let mut rows = known.rows.clone();
            rows[size - 1] = rows[0].clone();
            let solution = rational_system(&rows).solve_with_gauss().unwrap();
            assert_eq!(solution.state(), SolutionState::Infinite);
        }
    }
}

#[test]
fn solving_is_idempotent_and_leaves_original_system_untouched() {
    for known in random_systems(4, 10) {
        let system = known.rational_system();
        let mut solver = GaussSolver::new(system.clone());
        let first = solver.solve().unwrap();
        let second = solver.solve().unwrap();
        assert_eq!(first, second);
        assert_eq!(solver.system(), &system);
        assert_eq!(first.system(), &system);
    }
}

#[test]
fn independent_systems_can_be_solved_on_separate_threads() {
    let systems = random_systems(5, 8);
    std::thread::scope(|scope| {
        let handles: Vec<_> = systems
            .iter()
            .map(|known| {
                scope.spawn(move || {
                    let mut solver = GaussSolver::new(known.rational_system());
                    solver.solve().unwrap()
                })
            })
            .collect();
        for (handle, known) in handles.into_iter().zip(systems.iter()) {
            let solution = handle.join().expect("solver thread must not panic");
            assert_eq!(solution.values().as_slice(), known.rational_solution().as_slice());
        }
    });
}
