#![warn(missing_docs)]
//!
//! # Introduction
//!
//! This crate solves systems of linear equations over an *abstract* number
//! type. The solvers are not tied to `f64`: they work with any type for which
//! an [`Arithmetic`](crate::arithmetic::Arithmetic) is provided. This makes it
//! possible to solve systems exactly over the rationals, over complex numbers,
//! with checked integers or with floating point numbers and a custom zero
//! tolerance.
//!
//! A system of `$n$` equations with `$m$` unknowns
//!
//! ```math
//! \sum_{j=1}^{m} a_{ij} x_j = b_i, \quad i = 1,\dots,n
//! ```
//!
//! is stored as an `$n \times (m+1)$` matrix `$(A|\vec{b})$`, where the last
//! column is the right hand side, which we call the *solution column*.
//!
//! ## Solutions
//!
//! Solving a system never fails because the system is degenerate. Instead the
//! result is classified as a [`Solution`](crate::solution::Solution) with one of
//! the states
//! * [`Single`](crate::solution::SolutionState::Single): a unique solution, with one value per unknown,
//! * [`Unsolvable`](crate::solution::SolutionState::Unsolvable): the equations contradict each other,
//! * [`Infinite`](crate::solution::SolutionState::Infinite): there are free variables.
//!
//! Errors are only returned if the arithmetic cannot perform an operation,
//! e.g. an inexact integer division.
//!
//! # Usage
//!
//! 1. Choose an arithmetic for the number type, e.g.
//! [`CheckedFieldArithmetic`](crate::arithmetic::CheckedFieldArithmetic) for exact rationals,
//! [`FieldArithmetic`](crate::arithmetic::FieldArithmetic) for complex numbers or
//! [`FloatArithmetic`](crate::arithmetic::FloatArithmetic) for floating point numbers.
//! 2. Create an [`EquationSystem`](crate::system::EquationSystem) from the rows of
//! its matrix.
//! 3. Solve it using [`EquationSystem::solve_with_gauss`](crate::system::EquationSystem::solve_with_gauss)
//! or using a [`GaussSolver`](crate::solvers::gauss::GaussSolver) directly.
//!
//! ```rust
//! use linsys::prelude::*;
//!
//! // x + 2y = 3
//! // 4x + 5y = 6
//! let system = EquationSystem::from_rows(FloatArithmetic::<f64>::new(), &[[1., 2., 3.], [4., 5., 6.]])
//!     .expect("rows have equal length");
//! let solution = system.solve_with_gauss().expect("float arithmetic does not fail");
//! assert_eq!(solution.state(), SolutionState::Single);
//! assert!((solution.values()[0] + 1.).abs() < 1e-12);
//! assert!((solution.values()[1] - 2.).abs() < 1e-12);
//! ```
//!
//! # Logging
//!
//! The solvers emit [`tracing`](https://crates.io/crates/tracing) events for the
//! individual reduction steps (at trace level) and the final classification (at
//! debug level). Install a subscriber in your application to see them.

/// the arithmetic contract and its implementations for common number types
pub mod arithmetic;
/// a generic dense matrix with value semantics
pub mod matrix;
/// commonly used types
pub mod prelude;
/// classified solutions of equation systems
pub mod solution;
/// solvers for systems of linear equations
pub mod solvers;
/// systems of linear equations
pub mod system;
