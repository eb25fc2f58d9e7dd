//! Day 5: thermal environment diagnostics

use crate::utils::intcode::{Intcode, parse_program};
use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 5, tags = ["intcode"])]
pub struct Solver;

impl InputParser for Solver {
    type Parsed<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        parse_program(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        diagnostic(program, 1)
    }
}

impl PartSolver<2> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        diagnostic(program, 5)
    }
}

/// Run the diagnostic with a system id; the answer is the last output
fn diagnostic(program: &[i64], system_id: i64) -> Result<String, SolveError> {
    let mut vm = Intcode::with_inputs(program, &[system_id]);
    vm.run()?
        .map(|code| code.to_string())
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("diagnostic produced no output").into()))
}
