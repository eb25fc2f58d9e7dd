//! Puzzle Solver Library
//!
//! A trait-based framework for solving Advent of Code 2019 problems.
//! Each day is implemented as a solver with custom input parsing and can
//! produce results for multiple parts.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based solver definitions with compile-time checked parts
//! - Type-safe parsing separated from solving
//! - A day-keyed registry for looking up and running solvers
//! - Parse and solve timing on every run
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{
//!     InputParser, ParseError, PartSolver, RegisterableSolver, RegistryBuilder, SolveError,
//!     Solver,
//! };
//!
//! struct Day1;
//!
//! impl InputParser for Day1 {
//!     type Parsed<'a> = Vec<i64>;
//!
//!     fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(parsed: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
//!         Ok(parsed.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as PartSolver<1>>::solve(parsed),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = Day1
//!     .register_with(RegistryBuilder::new(), 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Solver Traits
//!
//! [`InputParser`] defines the parsed representation, [`PartSolver<N>`]
//! implements one part against it, and [`Solver`] dispatches a runtime
//! part number to the right impl. The `#[derive(DaySolver)]` macro
//! generates the [`Solver`] impl from the `PartSolver` impls.
//!
//! ## DynSolver
//!
//! [`DynSolver`] type-erases solver instances so the registry and CLI can
//! drive any day uniformly; `solve(part)` returns the answer with timing.
//!
//! ## Plugin Registration
//!
//! Days self-register with `#[derive(AutoRegister)]`:
//! ```ignore
//! #[derive(DaySolver, AutoRegister)]
//! #[day_solver(parts = 2)]
//! #[puzzle(day = 1, tags = ["arithmetic"])]
//! struct Solver;
//! ```
//! The registry collects them with [`RegistryBuilder::register_all_plugins`],
//! or a tag-filtered subset with [`RegistryBuilder::register_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
    MAX_DAYS,
};
pub use solver::{InputParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use puzzle_solver_macros::{AutoRegister, DaySolver};
