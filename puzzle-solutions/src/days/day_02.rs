//! Day 2: restore the gravity assist program

use crate::utils::intcode::{parse_program, Intcode, IntcodeError};
use anyhow::anyhow;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};

const WANTED_OUTPUT: i64 = 19690720;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 2, tags = ["intcode"])]
pub struct Solver;

impl InputParser for Solver {
    type Parsed<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        parse_program(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        Ok(run_patched(program, 12, 2)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        for noun in 0..=99 {
            for verb in 0..=99 {
                // A faulting candidate just isn't the answer
                if let Ok(output) = run_patched(program, noun, verb)
                    && output == WANTED_OUTPUT
                {
                    return Ok((100 * noun + verb).to_string());
                }
            }
        }
        Err(SolveError::SolveFailed(
            anyhow!("no noun/verb pair produces {WANTED_OUTPUT}").into(),
        ))
    }
}

/// Run the program with the two replacement values and return memory cell 0
fn run_patched(program: &[i64], noun: i64, verb: i64) -> Result<i64, IntcodeError> {
    let mut vm = Intcode::new(program);
    vm.write(1, noun);
    vm.write(2, verb);
    vm.run()?;
    Ok(vm.read(0))
}
