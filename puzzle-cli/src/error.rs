//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] puzzle_solver::RegistrationError),

    /// Input file error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Every selected solver was missing its input file
    #[error("No input files found for the selected solvers")]
    NoInputs,

    /// One or more solvers failed
    #[error("{0} solver(s) failed")]
    SolversFailed(usize),
}

/// Input store errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file does not exist
    #[error("No input for day {day}: {} not found", path.display())]
    Missing { day: u8, path: PathBuf },

    /// Input file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
