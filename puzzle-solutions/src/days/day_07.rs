//! Day 7: amplifier phase search

use crate::utils::intcode::{Intcode, parse_program};
use anyhow::anyhow;
use itertools::Itertools;
use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AutoRegister, DaySolver};

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[puzzle(day = 7, tags = ["intcode"])]
pub struct Solver;

impl InputParser for Solver {
    type Parsed<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::Parsed<'a>, ParseError> {
        parse_program(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        best_signal(program, 0..=4, serial_signal)
    }
}

impl PartSolver<2> for Solver {
    fn solve(program: &mut Self::Parsed<'_>) -> Result<String, SolveError> {
        best_signal(program, 5..=9, feedback_signal)
    }
}

fn best_signal(
    program: &[i64],
    phases: std::ops::RangeInclusive<i64>,
    chain: fn(&[i64], &[i64]) -> Result<i64, SolveError>,
) -> Result<String, SolveError> {
    let mut best = None;
    for order in phases.permutations(5) {
        let signal = chain(program, &order)?;
        best = Some(best.map_or(signal, |b: i64| b.max(signal)));
    }
    best.map(|b| b.to_string())
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("no phase orders to try").into()))
}

/// One pass through the amplifiers, each run to completion
fn serial_signal(program: &[i64], phases: &[i64]) -> Result<i64, SolveError> {
    let mut signal = 0;
    for &phase in phases {
        let mut amp = Intcode::with_inputs(program, &[phase, signal]);
        signal = amp
            .run()?
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("amplifier produced no output").into()))?;
    }
    Ok(signal)
}

/// Amplifiers wired in a loop; the answer is the last thruster signal
/// before the chain halts
fn feedback_signal(program: &[i64], phases: &[i64]) -> Result<i64, SolveError> {
    let mut amps: Vec<Intcode> = phases
        .iter()
        .map(|&phase| Intcode::with_inputs(program, &[phase]))
        .collect();

    let mut signal = 0;
    loop {
        for amp in &mut amps {
            amp.push_input(signal);
            match amp.run_until_output()? {
                Some(output) => signal = output,
                None => return Ok(signal),
            }
        }
    }
}
