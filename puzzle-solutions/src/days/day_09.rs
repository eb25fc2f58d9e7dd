//! Day 9: BOOST keycode and distress coordinates

use crate::utils::intcode::{Intcode, parse_program};
use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 9, tags = ["intcode"])]
pub struct Solver;

impl InputParser for Solver {
    type Parsed<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        parse_program(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        run_boost(program, 1)
    }
}

impl PartSolver<2> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        run_boost(program, 2)
    }
}

fn run_boost(program: &[i64], mode: i64) -> Result<String, SolveError> {
    let mut vm = Intcode::with_inputs(program, &[mode]);
    vm.run()?
        .map(|out| out.to_string())
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("BOOST produced no output").into()))
}
